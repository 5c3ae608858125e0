use std::collections::HashMap;
use std::path::PathBuf;

use indexmap::IndexSet;
use rustgen_core::{Diagnostic, Diagnostics};
use rustgen_ir::{Model, Property};
use serde::Serialize;

use super::{PHASE, Transformer, log_warnings};
use crate::naming::escape_text;
use crate::types::TypeMapper;

/// A model ready for the model template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedModel {
    /// Name as written in the document.
    pub name: String,
    pub class_name: String,
    pub filename: String,
    pub doc_filename: String,
    pub path: PathBuf,
    pub doc_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub vars: Vec<DecoratedProperty>,
    /// Types referenced by the fields that are not Rust primitives, first use first.
    pub imports: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// A model field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedProperty {
    pub name: String,
    pub var_name: String,
    pub data_type: String,
    /// Innermost rendered type (`Pet` for `Vec<Pet>`).
    pub base_type: String,
    pub required: bool,
    pub is_container: bool,
    pub need_to_import: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_info: Option<PropertyEnum>,
}

/// The enum generated for a restricted property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyEnum {
    pub name: String,
    pub vars: Vec<EnumVar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumVar {
    pub name: String,
    /// Literal text, escaped for a string literal unless numeric.
    pub value: String,
}

impl Transformer<'_> {
    /// Decorate every model in document order.
    pub fn transform_models(&self, models: &[Model]) -> Vec<DecoratedModel> {
        models.iter().map(|model| self.transform_model(model)).collect()
    }

    pub fn transform_model(&self, model: &Model) -> DecoratedModel {
        tracing::debug!(model = %model.name, properties = model.properties.len(), "decorating model");

        let mut diags = Diagnostics::new();
        let class_name = self.naming.to_model_name(&model.name, &mut diags);
        // same rewrites as the class name, already reported
        let filename = self
            .naming
            .to_model_filename(&model.name, &mut Diagnostics::new());
        let doc_filename = self
            .naming
            .to_model_doc_filename(&model.name, &mut Diagnostics::new());
        diags.locate(&format!("models.{}", model.name));
        let mut diagnostics = diags.take();

        let mut vars = Vec::with_capacity(model.properties.len());
        let mut imports = IndexSet::new();
        let mut fields: HashMap<String, &str> = HashMap::new();

        for property in &model.properties {
            let var = self.transform_property(property, &mut diags);

            if let Some(first) = fields.get(var.var_name.as_str()) {
                diags.warning(
                    PHASE,
                    format!(
                        "'{}' and '{}' both map to field {}",
                        first, property.name, var.var_name
                    ),
                );
            } else {
                fields.insert(var.var_name.clone(), &property.name);
            }

            if var.need_to_import {
                imports.insert(var.base_type.clone());
            }

            diags.locate(&format!("models.{}.{}", model.name, property.name));
            diagnostics.extend(diags.take());
            vars.push(var);
        }

        log_warnings(&diagnostics);

        DecoratedModel {
            name: model.name.clone(),
            path: self.paths.model_file(&filename),
            doc_path: self.paths.model_doc_file(&doc_filename),
            class_name,
            filename,
            doc_filename,
            description: model.description.as_deref().map(escape_text),
            vars,
            imports: imports.into_iter().collect(),
            diagnostics,
        }
    }

    pub fn transform_property(
        &self,
        property: &Property,
        diags: &mut Diagnostics,
    ) -> DecoratedProperty {
        let types = self.types();
        let var_name = self.naming.to_var_name(&property.name, diags);
        let data_type = types.render_type(&property.schema);
        let base_type = types.render_type(property.schema.base());

        if let Some(tag) = types.unmapped_primitive(&property.schema) {
            diags.info(PHASE, format!("no Rust type for '{}', used as-is", tag));
        }

        let enum_info = property
            .is_enum
            .then(|| self.property_enum(property, &base_type, diags));

        let default_value = property.default_value.as_deref().map(|raw| {
            enum_info
                .as_ref()
                .and_then(|info| self.enum_default(info, raw, &base_type))
                .unwrap_or_else(|| raw.to_string())
        });

        DecoratedProperty {
            name: property.name.clone(),
            var_name,
            need_to_import: self.mapping.need_to_import(&base_type),
            is_container: property.schema.is_container(),
            data_type,
            base_type,
            required: property.required,
            default_value,
            description: property.description.as_deref().map(escape_text),
            enum_info,
        }
    }

    fn property_enum(
        &self,
        property: &Property,
        datatype: &str,
        diags: &mut Diagnostics,
    ) -> PropertyEnum {
        PropertyEnum {
            name: self.naming.to_enum_name(property, diags),
            vars: property
                .enum_values
                .iter()
                .map(|value| EnumVar {
                    name: self.naming.to_enum_var_name(value, datatype, diags),
                    value: self.naming.to_enum_value(value, datatype),
                })
                .collect(),
        }
    }

    /// Resolve a raw default to the enum constant holding the same literal.
    fn enum_default(&self, info: &PropertyEnum, raw: &str, datatype: &str) -> Option<String> {
        let literal = self.naming.to_enum_value(raw, datatype);
        info.vars
            .iter()
            .find(|var| var.value == literal)
            .map(|var| self.naming.to_enum_default_value(&var.name, &info.name))
    }
}
