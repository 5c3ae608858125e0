//! Configuration for the rustgen client generator.
//!
//! Every value is optional; anything missing from `rustgen.toml` falls back
//! to the generator defaults (package `swagger` version `1.0.0`, output under
//! `generated-code/rust`).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;
mod validate;

pub use config::{
    DEFAULT_OUTPUT_FOLDER, DEFAULT_PACKAGE_NAME, DEFAULT_PACKAGE_VERSION, GeneratorConfig,
    ModelConfig, OutputConfig, PackageConfig,
};
pub use error::{Error, Result};
