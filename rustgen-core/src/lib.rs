//! Core utilities and types for the rustgen client generator.
//!
//! This crate provides the case conversions, the identifier sanitizer, the
//! Rust keyword list and the diagnostic types shared by every other rustgen
//! crate.

mod diagnostic;
mod keywords;
mod utils;

// Diagnostics
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
// Keywords
pub use keywords::{RUST_RESERVED_WORDS, is_rust_keyword};
// String utilities
pub use utils::{sanitize_name, starts_with_digit, to_pascal_case, to_snake_case};
