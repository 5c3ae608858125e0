//! The generator facade.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustgen_config::GeneratorConfig;
use rustgen_core::Diagnostic;
use rustgen_ir::Document;
use serde::Serialize;

use crate::naming::Naming;
use crate::paths::PathResolver;
use crate::supporting::{RUST_TEMPLATE_FILES, ResolvedFile, SupportingFiles, TemplateFile};
use crate::transform::{ApiGroup, DecoratedModel, DecoratedOperation, Transformer};
use crate::types::TypeMapping;

/// Generator registry name.
pub const GENERATOR_NAME: &str = "rust-hyper-client";

/// Folder, relative to the crate root, that API and model docs are linked from.
pub const DOC_PATH: &str = "docs/";

/// What a generator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Client,
}

/// Rust client generator.
///
/// All tables are built in [`Generator::new`] and never change afterwards,
/// so one generator can serve any number of documents.
#[derive(Debug, Clone)]
pub struct Generator {
    package_name: String,
    package_version: String,
    naming: Naming,
    mapping: TypeMapping,
    paths: PathResolver,
    supporting_files: SupportingFiles,
}

impl Generator {
    pub fn new(config: &GeneratorConfig) -> Self {
        tracing::debug!(
            package = %config.package.name,
            output = %config.output.folder.display(),
            "building generator tables"
        );

        Self {
            package_name: config.package.name.clone(),
            package_version: config.package.version.clone(),
            naming: Naming::from_config(config),
            mapping: TypeMapping::rust(),
            paths: PathResolver::new(&config.output.folder),
            supporting_files: SupportingFiles::rust_client(),
        }
    }

    pub fn name(&self) -> &'static str {
        GENERATOR_NAME
    }

    pub fn tag(&self) -> GeneratorKind {
        GeneratorKind::Client
    }

    pub fn help(&self) -> &'static str {
        "Generates a rust client library."
    }

    /// Values handed to every template alongside the decorated records.
    pub fn additional_properties(&self) -> IndexMap<&'static str, String> {
        IndexMap::from([
            ("packageName", self.package_name.clone()),
            ("packageVersion", self.package_version.clone()),
            ("apiDocPath", DOC_PATH.to_string()),
            ("modelDocPath", DOC_PATH.to_string()),
        ])
    }

    pub fn naming(&self) -> &Naming {
        &self.naming
    }

    pub fn type_mapping(&self) -> &TypeMapping {
        &self.mapping
    }

    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    pub fn output_folder(&self) -> &Path {
        self.paths.root()
    }

    pub fn supporting_files(&self) -> &SupportingFiles {
        &self.supporting_files
    }

    pub fn template_files(&self) -> &'static [TemplateFile] {
        RUST_TEMPLATE_FILES
    }

    /// Decorate a document.
    pub fn transform(&self, document: &Document) -> GenerationPlan {
        let transformer = Transformer::new(&self.naming, &self.mapping, &self.paths);

        let models = transformer.transform_models(&document.models);
        let apis = transformer.transform_operations(&document.operations);

        let plan = GenerationPlan {
            generator: GENERATOR_NAME,
            kind: self.tag(),
            output_folder: self.paths.root().to_path_buf(),
            additional_properties: self.additional_properties(),
            supporting_files: self.supporting_files.resolve_under(self.paths.root()),
            models,
            apis,
        };

        tracing::info!(
            models = plan.models.len(),
            apis = plan.apis.len(),
            warnings = plan.warning_count(),
            "transform complete"
        );

        plan
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default())
    }
}

/// Everything a renderer needs to write a client crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationPlan {
    pub generator: &'static str,
    pub kind: GeneratorKind,
    pub output_folder: PathBuf,
    pub additional_properties: IndexMap<&'static str, String>,
    pub supporting_files: Vec<ResolvedFile>,
    pub models: Vec<DecoratedModel>,
    pub apis: Vec<ApiGroup>,
}

impl GenerationPlan {
    /// All diagnostics: models first, then operations, each in document order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        let models = self.models.iter().flat_map(|m| m.diagnostics.iter());

        let mut operations: Vec<&DecoratedOperation> = self
            .apis
            .iter()
            .flat_map(|api| api.operations.iter())
            .collect();
        operations.sort_by_key(|op| op.document_index);

        models.chain(
            operations
                .into_iter()
                .flat_map(|op| op.diagnostics.iter()),
        )
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().any(|d| d.severity.is_error())
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}
