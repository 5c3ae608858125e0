//! Core operations.
//!
//! This module contains the business logic for rustgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod files;
pub mod load;

pub use check::check;
pub use files::files;
pub use load::{load_config, load_document};
