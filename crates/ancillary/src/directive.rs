//! Position directives
//!
//! A directive is a class name of the form
//! `ancillary-<base>-<element>-position-<container>`. Matching is
//! case-insensitive and the extracted names are lowercased.

/// Prefix shared by every directive
const DIRECTIVE_PREFIX: &str = "ancillary-";

/// Separator between element and container names (trailing `-` optional)
const POSITION_SEPARATOR: &str = "-position";

/// Longest element name a directive on the host can carry, in characters
pub const MAX_ELEMENT_NAME_LEN: usize = 20;

/// One element → container assignment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    pub element_name: String,
    pub container_name: String,
}

/// Parse a class name into a directive for `base_name`.
///
/// Every `ancillary-` and `<base_name>-` occurrence is stripped (anywhere in
/// the string), the rest is lowercased and split on `-position`. Anything
/// that does not split into exactly two non-empty names is not a directive.
pub fn parse(token: &str, base_name: &str) -> Option<Directive> {
    let lowered = token.to_lowercase();
    let base_prefix = format!("{}-", base_name.to_lowercase());
    let stripped = strip_prefixes(&lowered, &base_prefix);

    match split_position(&stripped).as_slice() {
        [element, container] if !element.is_empty() && !container.is_empty() => Some(Directive {
            element_name: element.to_string(),
            container_name: container.to_string(),
        }),
        _ => None,
    }
}

/// Remove `ancillary-` and `base_prefix` in one left-to-right pass.
/// At a position where both could match, `ancillary-` wins.
fn strip_prefixes(s: &str, base_prefix: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        if let Some(r) = rest.strip_prefix(DIRECTIVE_PREFIX) {
            rest = r;
        } else if let Some(r) = rest.strip_prefix(base_prefix) {
            rest = r;
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    out
}

fn split_position(s: &str) -> Vec<&str> {
    let mut parts = Vec::with_capacity(2);
    let mut rest = s;

    while let Some(idx) = rest.find(POSITION_SEPARATOR) {
        parts.push(&rest[..idx]);
        rest = &rest[idx + POSITION_SEPARATOR.len()..];
        rest = rest.strip_prefix('-').unwrap_or(rest);
    }
    parts.push(rest);

    parts
}

/// Locate a directive for `base_name` inside a single class token.
///
/// The directive may start anywhere in the token and always runs to its
/// end. The element part must be 1..=[`MAX_ELEMENT_NAME_LEN`] characters
/// followed by `-position-` and a non-empty container part.
pub(crate) fn find_directive<'a>(token: &'a str, base_name: &str) -> Option<&'a str> {
    let needle = format!("{}{}-", DIRECTIVE_PREFIX, base_name.to_lowercase());

    token.char_indices().find_map(|(i, _)| {
        let rest = strip_prefix_ignore_case(&token[i..], &needle)?;
        has_position_split(rest).then_some(&token[i..])
    })
}

fn has_position_split(rest: &str) -> bool {
    const SEPARATOR: &str = "-position-";

    rest.char_indices()
        .skip(1)
        .take(MAX_ELEMENT_NAME_LEN)
        .any(|(k, _)| {
            strip_prefix_ignore_case(&rest[k..], SEPARATOR)
                .is_some_and(|container| !container.is_empty())
        })
}

/// Strip a lowercase `prefix` from `s`, comparing with Unicode lowercasing.
/// The match must end on a character boundary of `s`.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let mut expected = prefix.chars().peekable();

    for (i, c) in s.char_indices() {
        if expected.peek().is_none() {
            return Some(&s[i..]);
        }
        for lower in c.to_lowercase() {
            if expected.next() != Some(lower) {
                return None;
            }
        }
    }

    expected.peek().is_none().then_some("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(element: &str, container: &str) -> Option<Directive> {
        Some(Directive {
            element_name: element.to_string(),
            container_name: container.to_string(),
        })
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(
            parse("ancillary-widget-logo-position-header", "widget"),
            directive("logo", "header")
        );
    }

    #[test]
    fn test_parse_any_case() {
        assert_eq!(
            parse("Ancillary-WIDGET-Logo-Position-Header", "widget"),
            directive("logo", "header")
        );
        assert_eq!(
            parse("ancillary-widget-logo-position-header", "WiDgEt"),
            directive("logo", "header")
        );
    }

    #[test]
    fn test_parse_without_prefixes() {
        // Prefixes are stripped when present, not required
        assert_eq!(parse("logo-position-header", "widget"), directive("logo", "header"));
    }

    #[test]
    fn test_parse_strip_order_irrelevant() {
        assert_eq!(
            parse("widget-ancillary-logo-position-header", "widget"),
            directive("logo", "header")
        );
    }

    #[test]
    fn test_parse_strips_base_inside_names() {
        // `<base>-` is removed wherever it appears
        assert_eq!(
            parse("ancillary-w-new-logo-position-header", "w"),
            directive("nelogo", "header")
        );
    }

    #[test]
    fn test_parse_trailing_dash_optional() {
        assert_eq!(parse("ancillary-w-logo-positionheader", "w"), directive("logo", "header"));
    }

    #[test]
    fn test_parse_rejects_non_directives() {
        assert_eq!(parse("home", "widget"), None);
        assert_eq!(parse("ancillary-widget-logo", "widget"), None);
        assert_eq!(parse("ancillary-widget-a-position-b-position-c", "widget"), None);
        assert_eq!(parse("ancillary-widget--position-header", "widget"), None);
        assert_eq!(parse("ancillary-widget-logo-position-", "widget"), None);
        assert_eq!(parse("", "widget"), None);
    }

    #[test]
    fn test_parse_keeps_dashes_in_names() {
        assert_eq!(
            parse("ancillary-theme-mini-cart-position-top-bar", "theme"),
            directive("mini-cart", "top-bar")
        );
    }

    #[test]
    fn test_find_directive_in_token() {
        assert_eq!(
            find_directive("ancillary-w-logo-position-header", "w"),
            Some("ancillary-w-logo-position-header")
        );
        assert_eq!(
            find_directive("xANCILLARY-W-logo-position-header", "w"),
            Some("ANCILLARY-W-logo-position-header")
        );
    }

    #[test]
    fn test_find_directive_unicode_case() {
        assert_eq!(
            find_directive("ancillary-CAFÉ-logo-position-header", "café"),
            Some("ancillary-CAFÉ-logo-position-header")
        );
        assert_eq!(
            find_directive("ancillary-café-logo-POSITION-header", "CAFÉ"),
            Some("ancillary-café-logo-POSITION-header")
        );
    }

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(strip_prefix_ignore_case("ÉTÉ-rest", "été-"), Some("rest"));
        assert_eq!(strip_prefix_ignore_case("été", "été"), Some(""));
        assert_eq!(strip_prefix_ignore_case("ét", "été"), None);
        assert_eq!(strip_prefix_ignore_case("abc", ""), Some("abc"));
    }

    #[test]
    fn test_find_directive_other_base() {
        assert_eq!(find_directive("ancillary-other-logo-position-header", "w"), None);
    }

    #[test]
    fn test_find_directive_element_length_limit() {
        let twenty = "a".repeat(20);
        let twenty_one = "a".repeat(21);
        let ok = format!("ancillary-w-{}-position-x", twenty);
        let too_long = format!("ancillary-w-{}-position-x", twenty_one);

        assert!(find_directive(&ok, "w").is_some());
        assert!(find_directive(&too_long, "w").is_none());
    }

    #[test]
    fn test_find_directive_requires_container() {
        assert_eq!(find_directive("ancillary-w-logo-position-", "w"), None);
        assert_eq!(find_directive("ancillary-w-logo-positionx", "w"), None);
    }
}
