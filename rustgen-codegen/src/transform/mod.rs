//! Decoration of document models and operations.
//!
//! The pass is a pure mapping in document order: every input record yields
//! one decorated copy carrying its Rust names, rendered types, output paths
//! and the diagnostics raised while naming it.

mod model;
mod operation;

use rustgen_core::Diagnostic;

pub use model::{DecoratedModel, DecoratedProperty, EnumVar, PropertyEnum};
pub use operation::{
    ApiGroup, DEFAULT_TAG, DecoratedOperation, DecoratedParameter, DecoratedType, http_method_label,
    sanitize_tag,
};

use crate::naming::Naming;
use crate::paths::PathResolver;
use crate::types::{RustTypeMapper, TypeMapping};

/// Phase name for diagnostics raised by the pass itself.
pub const PHASE: &str = "transform";

/// Borrowed view of the generator tables used by one pass.
#[derive(Debug, Clone, Copy)]
pub struct Transformer<'a> {
    naming: &'a Naming,
    mapping: &'a TypeMapping,
    paths: &'a PathResolver,
}

impl<'a> Transformer<'a> {
    pub fn new(naming: &'a Naming, mapping: &'a TypeMapping, paths: &'a PathResolver) -> Self {
        Self {
            naming,
            mapping,
            paths,
        }
    }

    fn types(&self) -> RustTypeMapper<'a> {
        RustTypeMapper::new(self.mapping, self.naming)
    }
}

/// Mirror warnings into the log so they show up without a diagnostics printer.
fn log_warnings(diagnostics: &[Diagnostic]) {
    for diag in diagnostics.iter().filter(|d| d.severity.is_warning()) {
        match &diag.location {
            Some(location) => tracing::warn!(location = %location, "{}", diag.message),
            None => tracing::warn!("{}", diag.message),
        }
    }
}
