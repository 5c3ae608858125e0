//! Schema type representation.

use serde::{Deserialize, Serialize};

/// The type of a property, parameter or return value.
///
/// Containers and model references are resolved by the parser when the
/// document is built, so nothing downstream has to inspect rendered type text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaType {
    /// An OpenAPI primitive such as `integer`, `string` or `binary`.
    Primitive { name: String },
    /// An array of `items`.
    Array { items: Box<SchemaType> },
    /// A string-keyed map of `values`.
    Map { values: Box<SchemaType> },
    /// A reference to another model in the document.
    Model { name: String },
}

impl SchemaType {
    pub fn primitive(name: impl Into<String>) -> Self {
        SchemaType::Primitive { name: name.into() }
    }

    pub fn array(items: SchemaType) -> Self {
        SchemaType::Array {
            items: Box::new(items),
        }
    }

    pub fn map(values: SchemaType) -> Self {
        SchemaType::Map {
            values: Box::new(values),
        }
    }

    pub fn model(name: impl Into<String>) -> Self {
        SchemaType::Model { name: name.into() }
    }

    /// Returns true for arrays and maps.
    pub fn is_container(&self) -> bool {
        matches!(self, SchemaType::Array { .. } | SchemaType::Map { .. })
    }

    /// The innermost non-container type (e.g. `Pet` for an array of maps of `Pet`).
    pub fn base(&self) -> &SchemaType {
        match self {
            SchemaType::Array { items } => items.base(),
            SchemaType::Map { values } => values.base(),
            other => other,
        }
    }
}
