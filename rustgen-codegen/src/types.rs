//! OpenAPI type to Rust type mapping.
//!
//! [`TypeMapping`] holds the fixed primitive table. [`TypeMapper`] renders a
//! whole [`SchemaType`] from per-kind hooks, so containers and model
//! references never have to be recognized from rendered text.

use std::collections::HashSet;

use indexmap::IndexMap;
use rustgen_core::Diagnostics;
use rustgen_ir::SchemaType;
use serde::Serialize;

use crate::naming::Naming;

/// Rust types that are always in scope in generated code.
pub const LANGUAGE_PRIMITIVES: &[&str] = &[
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64", "char", "bool", "String",
    "Vec<u8>", "File",
];

/// Container markers that never need an import.
pub const DEFAULT_INCLUDES: &[&str] = &["map", "array"];

/// OpenAPI primitive -> Rust type, in declaration order.
const RUST_TYPE_TABLE: &[(&str, &str)] = &[
    ("integer", "i32"),
    ("long", "i64"),
    ("number", "f32"),
    ("float", "f32"),
    ("double", "f64"),
    ("boolean", "bool"),
    ("string", "String"),
    ("UUID", "String"),
    ("date", "String"),
    ("DateTime", "String"),
    ("dateTime", "String"),
    ("password", "String"),
    ("file", "File"),
    ("binary", "Vec<u8>"),
    ("ByteArray", "String"),
    ("object", "Value"),
];

/// The primitive table plus the sets used to decide imports.
#[derive(Debug, Clone)]
pub struct TypeMapping {
    table: IndexMap<String, String>,
    primitives: HashSet<String>,
    includes: HashSet<String>,
}

impl TypeMapping {
    /// The Rust client table.
    pub fn rust() -> Self {
        Self {
            table: RUST_TYPE_TABLE
                .iter()
                .map(|(tag, ty)| (tag.to_string(), ty.to_string()))
                .collect(),
            primitives: LANGUAGE_PRIMITIVES.iter().map(|s| s.to_string()).collect(),
            includes: DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Map an OpenAPI primitive, passing unknown tags through unchanged.
    pub fn map_primitive(&self, tag: &str) -> String {
        self.table
            .get(tag)
            .cloned()
            .unwrap_or_else(|| tag.to_string())
    }

    /// Returns true if the tag has an entry in the table.
    pub fn is_mapped(&self, tag: &str) -> bool {
        self.table.contains_key(tag)
    }

    /// Returns true if `name` is a Rust primitive.
    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(name)
    }

    /// Returns true unless the type is a Rust primitive or a container marker.
    pub fn need_to_import(&self, name: &str) -> bool {
        !self.includes.contains(name) && !self.primitives.contains(name)
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        Self::rust()
    }
}

/// Renders schema types into target-language type text.
///
/// Implementors provide the per-kind hooks; `render_type` walks the tree.
pub trait TypeMapper {
    /// Map an OpenAPI primitive.
    fn map_primitive(&self, tag: &str) -> String;

    /// Map an array of already rendered items.
    fn map_array(&self, items: &str) -> String;

    /// Map a string-keyed map of already rendered values.
    fn map_map(&self, values: &str) -> String;

    /// Map a reference to another model.
    fn map_model(&self, name: &str) -> String;

    /// Render a full schema type.
    fn render_type(&self, schema: &SchemaType) -> String {
        match schema {
            SchemaType::Primitive { name } => self.map_primitive(name),
            SchemaType::Array { items } => self.map_array(&self.render_type(items)),
            SchemaType::Map { values } => self.map_map(&self.render_type(values)),
            SchemaType::Model { name } => self.map_model(name),
        }
    }
}

/// Outermost container of a method's return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    List,
    Map,
}

/// A type as written inside a generated API method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodType {
    /// Type text with model references qualified by `super::`.
    pub type_in_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
}

/// Rust type mapper.
///
/// Model references are rendered with their normalized model name.
#[derive(Debug, Clone, Copy)]
pub struct RustTypeMapper<'a> {
    mapping: &'a TypeMapping,
    naming: &'a Naming,
}

impl<'a> RustTypeMapper<'a> {
    pub fn new(mapping: &'a TypeMapping, naming: &'a Naming) -> Self {
        Self { mapping, naming }
    }

    /// Returns true if the rendered type needs an import in generated code.
    pub fn need_to_import(&self, schema: &SchemaType) -> bool {
        self.mapping.need_to_import(&self.render_type(schema))
    }

    /// The innermost primitive tag, if the table has no entry for it.
    pub fn unmapped_primitive(&self, schema: &SchemaType) -> Option<String> {
        match schema.base() {
            SchemaType::Primitive { name } if !self.mapping.is_mapped(name) => Some(name.clone()),
            _ => None,
        }
    }

    /// Render a type for use inside an API method.
    ///
    /// Models become `super::Name`, arrays and maps of models wrap the
    /// qualified name, and primitives are rendered as usual.
    pub fn decorate_for_method(&self, schema: &SchemaType) -> MethodType {
        let container = match schema {
            SchemaType::Array { .. } => Some(Container::List),
            SchemaType::Map { .. } => Some(Container::Map),
            _ => None,
        };

        MethodType {
            type_in_method: self.render_qualified(schema),
            container,
        }
    }

    fn render_qualified(&self, schema: &SchemaType) -> String {
        match schema {
            SchemaType::Array { items } => self.map_array(&self.render_qualified(items)),
            SchemaType::Map { values } => self.map_map(&self.render_qualified(values)),
            SchemaType::Model { name } => format!("super::{}", self.map_model(name)),
            primitive => self.render_type(primitive),
        }
    }
}

impl TypeMapper for RustTypeMapper<'_> {
    fn map_primitive(&self, tag: &str) -> String {
        self.mapping.map_primitive(tag)
    }

    fn map_array(&self, items: &str) -> String {
        format!("Vec<{}>", items)
    }

    fn map_map(&self, values: &str) -> String {
        format!("::std::collections::HashMap<String, {}>", values)
    }

    fn map_model(&self, name: &str) -> String {
        // rename diagnostics are reported where the model itself is decorated
        self.naming.to_model_name(name, &mut Diagnostics::new())
    }
}
