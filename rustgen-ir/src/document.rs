//! Document, model and operation records.

use serde::{Deserialize, Serialize};

use crate::SchemaType;

/// A parsed API document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Schemas, in document order.
    #[serde(default)]
    pub models: Vec<Model>,
    /// Operations, in document order.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// A named schema with ordered properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<Property>,
}

/// A single property of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Name as written in the document.
    pub name: String,
    #[serde(rename = "type")]
    pub schema: SchemaType,
    #[serde(default)]
    pub required: bool,
    /// Whether the property is restricted to `enum_values`.
    #[serde(default)]
    pub is_enum: bool,
    /// Literal enum values, raw.
    #[serde(default)]
    pub enum_values: Vec<String>,
    /// Default value, raw.
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Property {
    /// A plain, optional property.
    pub fn new(name: impl Into<String>, schema: SchemaType) -> Self {
        Self {
            name: name.into(),
            schema,
            required: false,
            is_enum: false,
            enum_values: Vec::new(),
            default_value: None,
            description: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Restrict this property to the given literal values.
    pub fn with_enum<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.is_enum = true;
        self.enum_values = values.into_iter().map(Into::into).collect();
        self
    }
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Path,
    #[default]
    Query,
    Header,
    Body,
    Form,
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub schema: SchemaType,
    #[serde(default, rename = "in")]
    pub location: ParamLocation,
    #[serde(default)]
    pub required: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, schema: SchemaType, location: ParamLocation) -> Self {
        Self {
            name: name.into(),
            schema,
            location,
            required: location == ParamLocation::Path,
        }
    }
}

/// An HTTP operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation id as written in the document.
    pub operation_id: String,
    /// HTTP method token in any case (`GET`, `get`, ...).
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    /// API grouping tag. Untagged operations land in the default API.
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: Option<SchemaType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_from_json() {
        let doc: Document = serde_json::from_str(
            r#"{
                "models": [{
                    "name": "Pet",
                    "properties": [
                        {"name": "id", "type": {"kind": "primitive", "name": "long"}, "required": true},
                        {"name": "status", "type": {"kind": "primitive", "name": "string"},
                         "is_enum": true, "enum_values": ["available", "sold"]}
                    ]
                }],
                "operations": [{
                    "operation_id": "getPetById",
                    "http_method": "GET",
                    "path": "/pet/{petId}",
                    "tag": "pet",
                    "parameters": [{"name": "petId", "type": {"kind": "primitive", "name": "long"}, "in": "path", "required": true}],
                    "return_type": {"kind": "model", "name": "Pet"}
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.models[0].properties.len(), 2);
        assert!(doc.models[0].properties[1].is_enum);
        assert_eq!(doc.operations[0].parameters[0].location, ParamLocation::Path);
        assert_eq!(
            doc.operations[0].return_type,
            Some(SchemaType::model("Pet"))
        );
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert!(doc.models.is_empty());
        assert!(doc.operations.is_empty());
    }

    #[test]
    fn test_parameter_location_defaults_to_query() {
        let param: Parameter =
            serde_json::from_str(r#"{"name": "limit", "type": {"kind": "primitive", "name": "integer"}}"#)
                .unwrap();
        assert_eq!(param.location, ParamLocation::Query);
        assert!(!param.required);
    }

    #[test]
    fn test_path_parameters_are_required() {
        let param = Parameter::new("petId", SchemaType::primitive("long"), ParamLocation::Path);
        assert!(param.required);
    }
}
