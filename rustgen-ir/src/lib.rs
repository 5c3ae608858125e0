//! Input document model for the rustgen client generator.
//!
//! An external parser reduces an OpenAPI document to these types; the
//! naming layer in `rustgen-codegen` consumes them without mutation.
//!
//! # Architecture
//!
//! ```text
//! OpenAPI (yaml/json) → external parser → rustgen-ir (Document) → rustgen-codegen → renderer
//! ```

mod document;
mod types;

pub use document::{Document, Model, Operation, ParamLocation, Parameter, Property};
pub use types::SchemaType;
