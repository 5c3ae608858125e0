//! Naming and type-mapping layer for the rustgen Rust client generator.
//!
//! Given a [`Document`](rustgen_ir::Document), this crate decides the Rust
//! spelling of every identifier and type and the output path of every
//! generated artifact. Template rendering and file writing happen elsewhere;
//! they read the decorated records produced here.
//!
//! # Module Organization
//!
//! - [`naming`] - Reserved words, identifier normalization, enum names
//! - [`types`] - OpenAPI primitive to Rust type mapping
//! - [`paths`] - Output folders for APIs, models and docs
//! - [`supporting`] - Supporting-file and template registrations
//! - [`transform`] - Decoration of models and operations
//! - [`generator`] - The [`Generator`] facade tying it all together

pub mod generator;
pub mod naming;
pub mod paths;
pub mod supporting;
pub mod transform;
pub mod types;

pub use generator::{GENERATOR_NAME, GenerationPlan, Generator, GeneratorKind};
pub use naming::{Naming, ReservedWords};
pub use paths::PathResolver;
pub use supporting::{
    ArtifactKind, RUST_TEMPLATE_FILES, ResolvedFile, SupportingFile, SupportingFiles, TemplateFile,
};
pub use transform::{
    ApiGroup, DecoratedModel, DecoratedOperation, DecoratedParameter, DecoratedProperty,
    DecoratedType, EnumVar, PropertyEnum, Transformer,
};
pub use types::{Container, MethodType, RustTypeMapper, TypeMapper, TypeMapping};
