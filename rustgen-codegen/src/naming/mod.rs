//! Identifier naming for generated Rust code.
//!
//! [`Naming`] owns every table the name conversions need and is built once
//! per generator. All conversions are total: a name that collides with a
//! reserved word or starts with a digit is rewritten deterministically and
//! the rewrite is recorded in the caller's [`Diagnostics`] sink.
//!
//! [`Diagnostics`]: rustgen_core::Diagnostics

mod enums;
mod escape;
mod normalizer;
mod reserved;

use indexmap::IndexMap;
use rustgen_config::GeneratorConfig;

pub use enums::{DEFAULT_SYMBOL_ALIASES, NUMERIC_DATATYPES, is_numeric_datatype};
pub use escape::{escape_quotation_mark, escape_text, escape_unsafe_characters};
pub use reserved::{RUST_RESERVED_WORDS, ReservedWords};

/// Phase name attached to every naming diagnostic.
pub const PHASE: &str = "naming";

/// Immutable naming configuration.
#[derive(Debug, Clone)]
pub struct Naming {
    reserved: ReservedWords,
    model_prefix: String,
    model_suffix: String,
    symbols: IndexMap<String, String>,
}

impl Naming {
    /// Create naming rules around a reserved-word table, with the default
    /// symbol aliases and no model affixes.
    pub fn new(reserved: ReservedWords) -> Self {
        Self {
            reserved,
            model_prefix: String::new(),
            model_suffix: String::new(),
            symbols: DEFAULT_SYMBOL_ALIASES
                .iter()
                .map(|(symbol, alias)| (symbol.to_string(), alias.to_string()))
                .collect(),
        }
    }

    /// Build the Rust naming rules described by a configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(ReservedWords::rust().with_mappings(config.reserved_words_mappings.clone()))
            .with_model_affixes(&config.model.prefix, &config.model.suffix)
            .with_symbol_aliases(config.symbol_aliases.clone())
    }

    /// Set the model name prefix and suffix.
    pub fn with_model_affixes(mut self, prefix: &str, suffix: &str) -> Self {
        self.model_prefix = prefix.to_string();
        self.model_suffix = suffix.to_string();
        self
    }

    /// Add or override symbol aliases used for enum variant names.
    pub fn with_symbol_aliases(mut self, aliases: IndexMap<String, String>) -> Self {
        self.symbols.extend(aliases);
        self
    }

    /// Check if a name is reserved, ignoring case.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.is_reserved(name)
    }

    /// Escape a reserved word.
    pub fn escape_reserved_word(&self, name: &str) -> String {
        self.reserved.escape(name)
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self::new(ReservedWords::rust())
    }
}
