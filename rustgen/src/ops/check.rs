//! Check operation - run the naming pass and sort its diagnostics.

use std::path::Path;

use rustgen_codegen::Generator;
use rustgen_core::Severity;
use rustgen_ir::Document;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Transforms the document and groups the resulting diagnostics by severity.
pub fn check(generator: &Generator, document: &Document, document_path: &Path) -> CheckReport {
    let plan = generator.transform(document);

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in plan.diagnostics() {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    CheckReport {
        document_path: document_path.to_path_buf(),
        models: plan.models.len(),
        apis: plan.apis.len(),
        operations: plan.apis.iter().map(|api| api.operations.len()).sum(),
        errors,
        warnings,
        infos,
    }
}
