//! Diagnostic sinks
//!
//! Failures during sync never surface as errors. With `Config::debug` set
//! they are reported here instead; otherwise the controller stays silent.

use ancillary_dom::DomError;

/// Receives reports about elements that could not be placed
pub trait DiagnosticSink {
    /// No element is indexed under `element_name`
    fn missing_element(&self, element_name: &str);

    /// `element_name` was detached because its container did not resolve
    fn missing_container(&self, container_name: Option<&str>, element_name: &str);

    /// The tree refused to move `element_name` into `container_name`
    fn rejected_move(&self, element_name: &str, container_name: &str, error: &DomError);
}

/// Sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn missing_element(&self, element_name: &str) {
        tracing::error!("Element \"{}\" not found.", element_name);
    }

    fn missing_container(&self, container_name: Option<&str>, element_name: &str) {
        tracing::warn!(
            "Container \"{}\" not found. Removing element \"{}\".",
            container_name.unwrap_or_default(),
            element_name
        );
    }

    fn rejected_move(&self, element_name: &str, container_name: &str, error: &DomError) {
        tracing::warn!(
            "Cannot move element \"{}\" into container \"{}\": {}",
            element_name,
            container_name,
            error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ancillary_dom::NodeId;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect()
        }
    }

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        captured.lines()
    }

    #[test]
    fn test_missing_element_logs_error() {
        let lines = capture(|| TracingSink.missing_element("logo"));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"), "{}", lines[0]);
        assert!(lines[0].contains("Element \"logo\" not found."));
    }

    #[test]
    fn test_missing_container_logs_warning() {
        let lines = capture(|| {
            TracingSink.missing_container(Some("sidebar"), "cart");
            TracingSink.missing_container(None, "promo");
        });

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.contains("WARN")));
        assert!(lines[0].contains("Container \"sidebar\" not found. Removing element \"cart\"."));
        assert!(lines[1].contains("Container \"\" not found. Removing element \"promo\"."));
    }

    #[test]
    fn test_rejected_move_logs_warning() {
        let error = DomError::HierarchyRequest { parent: NodeId(3), child: NodeId(2) };
        let lines = capture(|| TracingSink.rejected_move("logo", "inner", &error));

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].contains("Cannot move element \"logo\" into container \"inner\""));
    }
}
