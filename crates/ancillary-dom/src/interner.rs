//! String Interner - Deduplicate strings to save memory
//!
//! Tag names and attribute names repeat on every element, so they are
//! stored once and referenced by a 4-byte ID.

use std::collections::HashMap;

/// Interned string ID - just 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// String interner for deduplicating strings
#[derive(Debug)]
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: HashMap<Box<str>, u32>,
}

impl StringInterner {
    /// Create a new string interner with common names pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::with_capacity(64),
            map: HashMap::with_capacity(64),
        };

        // Index 0 is always the empty string
        interner.intern("");

        const COMMON_TAGS: &[&str] = &[
            "html", "head", "body", "div", "span", "p", "a", "img",
            "ul", "li", "header", "footer", "nav", "main", "section", "aside",
        ];

        const COMMON_ATTRS: &[&str] = &[
            "id", "class", "style", "href", "src",
            "data-nc-base", "data-nc-element", "data-nc-container",
        ];

        for s in COMMON_TAGS.iter().chain(COMMON_ATTRS) {
            interner.intern(s);
        }

        interner
    }

    /// Intern a string, returning its ID
    /// If the string is already interned, returns the existing ID
    pub fn intern(&mut self, s: &str) -> InternedString {
        if let Some(&idx) = self.map.get(s) {
            return InternedString(idx);
        }

        let idx = self.strings.len() as u32;
        self.strings.push(s.into());
        self.map.insert(s.into(), idx);
        InternedString(idx)
    }

    /// Look up a string without interning it
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(s).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID (empty for unknown IDs)
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        self.strings.get(id.0 as usize).map(|s| &**s).unwrap_or("")
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Approximate heap memory held by the interner
    pub fn memory_usage(&self) -> usize {
        let text: usize = self.strings.iter().map(|s| s.len()).sum();
        // Each string is held twice: once in the table, once as a map key
        text * 2
            + self.strings.capacity() * std::mem::size_of::<Box<str>>()
            + self.map.capacity() * (std::mem::size_of::<Box<str>>() + std::mem::size_of::<u32>())
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedup() {
        let mut interner = StringInterner::new();
        let id1 = interner.intern("hello");
        let id2 = interner.intern("hello");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_get_string() {
        let mut interner = StringInterner::new();
        let id = interner.intern("world");
        assert_eq!(interner.get(id), "world");
    }

    #[test]
    fn test_empty_is_first() {
        let interner = StringInterner::new();
        assert_eq!(interner.lookup(""), Some(InternedString::EMPTY));
        assert_eq!(interner.get(InternedString::EMPTY), "");
    }

    #[test]
    fn test_lookup_does_not_intern() {
        let mut interner = StringInterner::new();
        let before = interner.len();
        assert!(interner.lookup("data-custom").is_none());
        assert_eq!(interner.len(), before);

        let id = interner.intern("data-custom");
        assert_eq!(interner.lookup("data-custom"), Some(id));
    }

    #[test]
    fn test_ancillary_attrs_preinterned() {
        let interner = StringInterner::new();
        assert!(interner.lookup("data-nc-element").is_some());
        assert!(interner.lookup("data-nc-container").is_some());
    }

    #[test]
    fn test_null_byte_round_trips() {
        let mut interner = StringInterner::new();
        let id = interner.intern("null\0char");
        assert_eq!(interner.get(id), "null\0char");
    }
}
