use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use rustgen_core::{Diagnostic, Diagnostics, sanitize_name, to_pascal_case};
use rustgen_ir::{Operation, ParamLocation, Parameter, SchemaType};
use serde::Serialize;

use super::{PHASE, Transformer, log_warnings};
use crate::types::{MethodType, TypeMapper};

/// Tag for operations that do not name one.
pub const DEFAULT_TAG: &str = "default";

/// The operations of one tag, ready for the API template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiGroup {
    pub tag: String,
    pub class_name: String,
    pub filename: String,
    pub doc_filename: String,
    pub path: PathBuf,
    pub doc_path: PathBuf,
    pub operations: Vec<DecoratedOperation>,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedOperation {
    /// Id as written in the document.
    pub operation_id: String,
    /// Method name in the generated API.
    pub nickname: String,
    /// Dispatch label, e.g. `Get`.
    pub http_method: String,
    pub path: String,
    pub params: Vec<DecoratedParameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<DecoratedType>,
    pub diagnostics: Vec<Diagnostic>,
    /// Position in the document's operation list.
    #[serde(skip)]
    pub(crate) document_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedParameter {
    pub name: String,
    pub param_name: String,
    pub data_type: String,
    pub base_type: String,
    #[serde(rename = "in")]
    pub location: ParamLocation,
    pub required: bool,
    pub need_to_import: bool,
}

/// A rendered type plus its in-method form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecoratedType {
    pub data_type: String,
    pub base_type: String,
    pub need_to_import: bool,
    #[serde(flatten)]
    pub method: MethodType,
}

/// Grouping key for a tag: `pet.store`, `pet-store` and `pet_store` all
/// become `PetStore`. Missing tags, or tags with nothing usable left, fall
/// back to [`DEFAULT_TAG`].
pub fn sanitize_tag(tag: Option<&str>) -> String {
    let sanitized = to_pascal_case(&sanitize_name(tag.unwrap_or_default()));
    let trimmed = sanitized.trim_matches('_');
    if trimmed.is_empty() {
        return DEFAULT_TAG.to_string();
    }
    trimmed.to_string()
}

/// `PUT` -> `Put`, `delete` -> `Delete`.
pub fn http_method_label(method: &str) -> String {
    to_pascal_case(&method.to_lowercase())
}

impl Transformer<'_> {
    /// Decorate every operation and group them by sanitized tag, in
    /// first-seen order.
    pub fn transform_operations(&self, operations: &[Operation]) -> Vec<ApiGroup> {
        let mut groups: IndexMap<String, Vec<DecoratedOperation>> = IndexMap::new();
        for (index, operation) in operations.iter().enumerate() {
            let tag = sanitize_tag(operation.tag.as_deref());
            let mut decorated = self.transform_operation(operation);
            decorated.document_index = index;
            groups.entry(tag).or_default().push(decorated);
        }

        groups
            .into_iter()
            .map(|(tag, operations)| self.api_group(&tag, operations))
            .collect()
    }

    pub fn transform_operation(&self, operation: &Operation) -> DecoratedOperation {
        tracing::debug!(operation = %operation.operation_id, method = %operation.http_method, "decorating operation");

        let mut diags = Diagnostics::new();
        let nickname = self
            .naming
            .to_operation_id(&operation.operation_id, &mut diags);
        let http_method = http_method_label(&operation.http_method);
        if http_method.is_empty() {
            diags.warning(PHASE, "operation has no HTTP method");
        }
        diags.locate(&format!("operations.{}", operation.operation_id));
        let mut diagnostics = diags.take();

        let mut params = Vec::with_capacity(operation.parameters.len());
        for param in &operation.parameters {
            params.push(self.transform_parameter(param, &mut diags));
            diags.locate(&format!(
                "operations.{}.{}",
                operation.operation_id, param.name
            ));
            diagnostics.extend(diags.take());
        }

        let return_type = operation
            .return_type
            .as_ref()
            .map(|schema| self.decorate_type(schema));

        log_warnings(&diagnostics);

        DecoratedOperation {
            operation_id: operation.operation_id.clone(),
            nickname,
            http_method,
            path: operation.path.clone(),
            params,
            return_type,
            diagnostics,
            document_index: 0,
        }
    }

    pub fn transform_parameter(
        &self,
        param: &Parameter,
        diags: &mut Diagnostics,
    ) -> DecoratedParameter {
        let types = self.types();
        let data_type = types.render_type(&param.schema);
        let base_type = types.render_type(param.schema.base());

        if let Some(tag) = types.unmapped_primitive(&param.schema) {
            diags.info(PHASE, format!("no Rust type for '{}', used as-is", tag));
        }

        DecoratedParameter {
            name: param.name.clone(),
            param_name: self.naming.to_param_name(&param.name, diags),
            need_to_import: self.mapping.need_to_import(&base_type),
            data_type,
            base_type,
            location: param.location,
            required: param.required,
        }
    }

    /// Render a return type with its container decoration.
    pub fn decorate_type(&self, schema: &SchemaType) -> DecoratedType {
        let types = self.types();
        let base_type = types.render_type(schema.base());
        DecoratedType {
            data_type: types.render_type(schema),
            need_to_import: self.mapping.need_to_import(&base_type),
            base_type,
            method: types.decorate_for_method(schema),
        }
    }

    fn api_group(&self, tag: &str, operations: Vec<DecoratedOperation>) -> ApiGroup {
        let filename = self.naming.to_api_filename(tag);
        let doc_filename = self.naming.to_api_doc_filename(tag);

        let mut imports = IndexSet::new();
        for operation in &operations {
            for param in operation.params.iter().filter(|p| p.need_to_import) {
                imports.insert(param.base_type.clone());
            }
            if let Some(ret) = operation.return_type.as_ref().filter(|r| r.need_to_import) {
                imports.insert(ret.base_type.clone());
            }
        }

        tracing::debug!(tag, operations = operations.len(), "grouped api");

        ApiGroup {
            tag: tag.to_string(),
            class_name: self.naming.to_api_name(tag),
            path: self.paths.api_file(&filename),
            doc_path: self.paths.api_doc_file(&doc_filename),
            filename,
            doc_filename,
            operations,
            imports: imports.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::naming::Naming;
    use crate::paths::PathResolver;
    use crate::types::{Container, TypeMapping};

    fn with_transformer<T>(f: impl FnOnce(&Transformer<'_>) -> T) -> T {
        let naming = Naming::default();
        let mapping = TypeMapping::rust();
        let paths = PathResolver::new("out");
        f(&Transformer::new(&naming, &mapping, &paths))
    }

    fn operation(id: &str, method: &str, tag: Option<&str>) -> Operation {
        Operation {
            operation_id: id.to_string(),
            http_method: method.to_string(),
            path: format!("/{}", id),
            tag: tag.map(str::to_string),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    #[test]
    fn test_http_method_label() {
        assert_eq!(http_method_label("PUT"), "Put");
        assert_eq!(http_method_label("get"), "Get");
        assert_eq!(http_method_label("DELETE"), "Delete");
        assert_eq!(http_method_label("Patch"), "Patch");
    }

    #[test]
    fn test_operation_names() {
        let mut op = operation("getPetById", "GET", Some("pet"));
        op.parameters = vec![
            Parameter::new("petId", SchemaType::primitive("long"), ParamLocation::Path),
            Parameter::new("X-Request-ID", SchemaType::primitive("string"), ParamLocation::Header),
        ];
        op.return_type = Some(SchemaType::model("Pet"));

        let decorated = with_transformer(|t| t.transform_operation(&op));

        assert_eq!(decorated.nickname, "get_pet_by_id");
        assert_eq!(decorated.http_method, "Get");
        assert_eq!(decorated.params[0].param_name, "pet_id");
        assert_eq!(decorated.params[0].data_type, "i64");
        assert!(decorated.params[0].required);
        assert_eq!(decorated.params[1].param_name, "x_request_id");
        assert!(decorated.diagnostics.is_empty());

        let ret = decorated.return_type.unwrap();
        assert_eq!(ret.data_type, "Pet");
        assert_eq!(ret.method.type_in_method, "super::Pet");
        assert!(ret.need_to_import);
    }

    #[test]
    fn test_list_return_type() {
        let mut op = operation("findPets", "get", Some("pet"));
        op.return_type = Some(SchemaType::array(SchemaType::model("Pet")));

        let ret = with_transformer(|t| t.transform_operation(&op))
            .return_type
            .unwrap();
        assert_eq!(ret.data_type, "Vec<Pet>");
        assert_eq!(ret.base_type, "Pet");
        assert_eq!(ret.method.type_in_method, "Vec<super::Pet>");
        assert_eq!(ret.method.container, Some(Container::List));
    }

    #[test]
    fn test_reserved_operation_id_is_located() {
        let op = operation("return", "POST", None);
        let decorated = with_transformer(|t| t.transform_operation(&op));

        assert_eq!(decorated.nickname, "call_return");
        assert_eq!(decorated.diagnostics.len(), 1);
        assert!(decorated.diagnostics[0].severity.is_warning());
        assert_eq!(
            decorated.diagnostics[0].location.as_deref(),
            Some("operations.return")
        );
    }

    #[test]
    fn test_missing_method_warns() {
        let op = operation("ping", "", None);
        let decorated = with_transformer(|t| t.transform_operation(&op));
        assert_eq!(decorated.diagnostics.len(), 1);
    }

    #[test]
    fn test_grouped_by_tag_in_first_seen_order() {
        let operations = vec![
            operation("addPet", "POST", Some("pet")),
            operation("getInventory", "GET", Some("store")),
            operation("ping", "GET", None),
            operation("updatePet", "PUT", Some("pet")),
            operation("health", "GET", Some("")),
        ];
        let groups = with_transformer(|t| t.transform_operations(&operations));

        let tags: Vec<_> = groups.iter().map(|g| g.tag.as_str()).collect();
        assert_eq!(tags, ["Pet", "Store", "default"]);

        let pet_ops: Vec<_> = groups[0].operations.iter().map(|o| o.nickname.as_str()).collect();
        assert_eq!(pet_ops, ["add_pet", "update_pet"]);
        assert_eq!(groups[2].operations.len(), 2);
    }

    #[test]
    fn test_api_group_names_and_paths() {
        let mut op = operation("listPets", "GET", Some("pet"));
        op.parameters = vec![Parameter::new(
            "filter",
            SchemaType::model("PetFilter"),
            ParamLocation::Body,
        )];
        op.return_type = Some(SchemaType::array(SchemaType::model("Pet")));
        let groups = with_transformer(|t| t.transform_operations(&[op]));

        let pet = &groups[0];
        assert_eq!(pet.class_name, "PetApi");
        assert_eq!(pet.filename, "pet_api");
        assert_eq!(pet.doc_filename, "PetApi");
        assert_eq!(pet.path, Path::new("out").join("src").join("apis").join("pet_api.rs"));
        assert_eq!(pet.doc_path, Path::new("out").join("docs").join("PetApi.md"));
        assert_eq!(pet.imports, ["PetFilter", "Pet"]);
    }

    #[test]
    fn test_default_group_names() {
        let groups =
            with_transformer(|t| t.transform_operations(&[operation("ping", "GET", None)]));
        assert_eq!(groups[0].class_name, "DefaultApi");
        assert_eq!(groups[0].filename, "default_api");
    }

    #[test]
    fn test_sanitize_tag() {
        assert_eq!(sanitize_tag(Some("pet")), "Pet");
        assert_eq!(sanitize_tag(Some("pet.store")), "PetStore");
        assert_eq!(sanitize_tag(Some("pet-store")), "PetStore");
        assert_eq!(sanitize_tag(Some("../../etc")), "Etc");
        assert_eq!(sanitize_tag(Some("/")), "default");
        assert_eq!(sanitize_tag(Some("")), "default");
        assert_eq!(sanitize_tag(None), "default");
    }

    #[test]
    fn test_tags_cannot_leave_api_folder() {
        let operations = vec![
            operation("a", "GET", Some("pet.store")),
            operation("b", "GET", Some("../../etc")),
            operation("c", "GET", Some("pet-store")),
            operation("d", "GET", Some("pet_store")),
            operation("e", "GET", Some("/abs")),
        ];
        let groups = with_transformer(|t| t.transform_operations(&operations));
        let apis = Path::new("out").join("src").join("apis");

        let names: Vec<_> = groups
            .iter()
            .map(|g| (g.class_name.as_str(), g.filename.as_str()))
            .collect();
        assert_eq!(
            names,
            [
                ("PetStoreApi", "pet_store_api"),
                ("EtcApi", "etc_api"),
                ("AbsApi", "abs_api"),
            ]
        );
        assert_eq!(groups[0].operations.len(), 3);
        assert_eq!(groups[0].doc_filename, "PetStoreApi");

        for group in &groups {
            assert_eq!(group.path.parent(), Some(apis.as_path()));
            assert!(group.doc_path.starts_with(Path::new("out").join("docs")));
        }
    }

    #[test]
    fn test_document_index_recorded() {
        let operations = vec![
            operation("a", "GET", Some("pet")),
            operation("b", "GET", Some("store")),
            operation("c", "GET", Some("pet")),
        ];
        let groups = with_transformer(|t| t.transform_operations(&operations));

        let pet: Vec<_> = groups[0].operations.iter().map(|o| o.document_index).collect();
        assert_eq!(pet, [0, 2]);
        assert_eq!(groups[1].operations[0].document_index, 1);
    }
}
