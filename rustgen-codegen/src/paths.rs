//! Output locations for generated artifacts.

use std::path::{Path, PathBuf};

/// Folder for API source files, relative to the output root.
pub const API_FOLDER: &[&str] = &["src", "apis"];

/// Folder for model source files, relative to the output root.
pub const MODEL_FOLDER: &[&str] = &["src", "models"];

/// Folder for API and model documentation, relative to the output root.
pub const DOC_FOLDER: &str = "docs";

/// Resolves output folders and files under a fixed root.
///
/// Paths are joined component-wise, so they use the host separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn api_file_folder(&self) -> PathBuf {
        self.root.join(API_FOLDER.iter().collect::<PathBuf>())
    }

    pub fn model_file_folder(&self) -> PathBuf {
        self.root.join(MODEL_FOLDER.iter().collect::<PathBuf>())
    }

    pub fn api_doc_file_folder(&self) -> PathBuf {
        self.root.join(DOC_FOLDER)
    }

    pub fn model_doc_file_folder(&self) -> PathBuf {
        self.root.join(DOC_FOLDER)
    }

    /// Source file for an API, given its normalized file stem.
    pub fn api_file(&self, stem: &str) -> PathBuf {
        self.api_file_folder().join(format!("{}.rs", stem))
    }

    /// Source file for a model, given its normalized file stem.
    pub fn model_file(&self, stem: &str) -> PathBuf {
        self.model_file_folder().join(format!("{}.rs", stem))
    }

    pub fn api_doc_file(&self, stem: &str) -> PathBuf {
        self.api_doc_file_folder().join(format!("{}.md", stem))
    }

    pub fn model_doc_file(&self, stem: &str) -> PathBuf {
        self.model_doc_file_folder().join(format!("{}.md", stem))
    }
}
