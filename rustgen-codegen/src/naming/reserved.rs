//! Reserved-word table and escaping.

use std::collections::HashSet;

use indexmap::IndexMap;
pub use rustgen_core::RUST_RESERVED_WORDS;
use rustgen_core::starts_with_digit;

/// A closed set of reserved words plus optional preferred replacements.
///
/// Words are stored lower-cased and matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    words: HashSet<String>,
    mappings: IndexMap<String, String>,
}

impl ReservedWords {
    /// Build a table from any list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            mappings: IndexMap::new(),
        }
    }

    /// The Rust keyword table.
    pub fn rust() -> Self {
        Self::new(RUST_RESERVED_WORDS)
    }

    /// Attach preferred replacements (e.g. `type` -> `kind`).
    pub fn with_mappings(mut self, mappings: IndexMap<String, String>) -> Self {
        self.mappings = mappings;
        self
    }

    /// Check if a name is a reserved word, ignoring case.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.words.contains(&name.to_lowercase())
    }

    /// Escape a reserved word.
    ///
    /// Uses the configured replacement when one exists for exactly this
    /// spelling, otherwise prefixes an underscore. A replacement that is
    /// itself reserved or starts with a digit is ignored.
    pub fn escape(&self, name: &str) -> String {
        match self.mappings.get(name) {
            Some(replacement)
                if !replacement.is_empty()
                    && !self.is_reserved(replacement)
                    && !starts_with_digit(replacement) =>
            {
                replacement.clone()
            }
            _ => format!("_{}", name),
        }
    }
}
