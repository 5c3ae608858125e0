//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Diagnostics from one naming pass over a document.
#[derive(Debug)]
pub struct CheckReport {
    pub document_path: PathBuf,
    pub models: usize,
    pub apis: usize,
    pub operations: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.document_path.display()));
            out.preformatted(&format!(
                "  {}, {} in {}",
                plural(self.models, "model"),
                plural(self.operations, "operation"),
                plural(self.apis, "api"),
            ));
        }
    }
}
