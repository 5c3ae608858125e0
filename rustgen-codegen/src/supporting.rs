//! Supporting-file and per-artifact template registrations.
//!
//! Supporting files are rendered once per generated crate (README, Cargo
//! manifest, module roots). Template files are rendered once per model or
//! API.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

/// A template rendered once into a fixed location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportingFile {
    /// Template identifier.
    pub template: String,
    /// Output subfolder, `/`-separated; empty for the crate root.
    pub folder: String,
    /// Output file name.
    pub destination: String,
}

impl SupportingFile {
    pub fn new(
        template: impl Into<String>,
        folder: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            destination: destination.into(),
        }
    }

    /// Output path relative to the crate root.
    pub fn relative_path(&self) -> PathBuf {
        self.folder
            .split('/')
            .filter(|part| !part.is_empty())
            .chain(std::iter::once(self.destination.as_str()))
            .collect()
    }
}

/// A supporting file with its final output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    pub template: String,
    pub path: PathBuf,
}

/// Ordered supporting-file registrations.
#[derive(Debug, Clone, Default)]
pub struct SupportingFiles {
    files: Vec<SupportingFile>,
}

impl SupportingFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Rust client crate skeleton.
    pub fn rust_client() -> Self {
        let mut files = Self::new();
        files.register(SupportingFile::new("README.mustache", "", "README.md"));
        files.register(SupportingFile::new("git_push.sh.mustache", "", "git_push.sh"));
        files.register(SupportingFile::new("gitignore.mustache", "", ".gitignore"));
        files.register(SupportingFile::new(
            "configuration.mustache",
            "src/apis",
            "configuration.rs",
        ));
        files.register(SupportingFile::new(".travis.yml", "", ".travis.yml"));
        files.register(SupportingFile::new("client.mustache", "src/apis", "client.rs"));
        files.register(SupportingFile::new("api_mod.mustache", "src/apis", "mod.rs"));
        files.register(SupportingFile::new("model_mod.mustache", "src/models", "mod.rs"));
        files.register(SupportingFile::new("lib.rs", "src", "lib.rs"));
        files.register(SupportingFile::new("Cargo.mustache", "", "Cargo.toml"));
        files
    }

    pub fn register(&mut self, file: SupportingFile) {
        self.files.push(file);
    }

    pub fn iter(&self) -> impl Iterator<Item = &SupportingFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Registrations with one entry per output path.
    ///
    /// When two registrations share a path the last one wins, at the
    /// position where the path first appeared.
    pub fn resolve(&self) -> Vec<SupportingFile> {
        let mut by_path: IndexMap<PathBuf, &SupportingFile> = IndexMap::new();
        for file in &self.files {
            by_path.insert(file.relative_path(), file);
        }
        by_path.into_values().cloned().collect()
    }

    /// Resolved registrations rooted under `root`.
    pub fn resolve_under(&self, root: &Path) -> Vec<ResolvedFile> {
        self.resolve()
            .into_iter()
            .map(|file| ResolvedFile {
                path: root.join(file.relative_path()),
                template: file.template,
            })
            .collect()
    }
}

/// What a per-artifact template renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Model,
    Api,
    ModelDoc,
    ApiDoc,
}

/// A template rendered once per model or API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateFile {
    pub template: &'static str,
    pub extension: &'static str,
    pub kind: ArtifactKind,
}

/// Per-artifact templates of the Rust client.
pub const RUST_TEMPLATE_FILES: &[TemplateFile] = &[
    TemplateFile {
        template: "model.mustache",
        extension: ".rs",
        kind: ArtifactKind::Model,
    },
    TemplateFile {
        template: "api.mustache",
        extension: ".rs",
        kind: ArtifactKind::Api,
    },
    TemplateFile {
        template: "model_doc.mustache",
        extension: ".md",
        kind: ArtifactKind::ModelDoc,
    },
    TemplateFile {
        template: "api_doc.mustache",
        extension: ".md",
        kind: ArtifactKind::ApiDoc,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_client_order() {
        let files = SupportingFiles::rust_client();
        let destinations: Vec<_> = files.iter().map(|f| f.destination.as_str()).collect();
        assert_eq!(
            destinations,
            [
                "README.md",
                "git_push.sh",
                ".gitignore",
                "configuration.rs",
                ".travis.yml",
                "client.rs",
                "mod.rs",
                "mod.rs",
                "lib.rs",
                "Cargo.toml",
            ]
        );
        // the two mod.rs files live in different folders
        assert_eq!(files.resolve().len(), 10);
    }

    #[test]
    fn test_relative_path() {
        let file = SupportingFile::new("configuration.mustache", "src/apis", "configuration.rs");
        assert_eq!(
            file.relative_path(),
            Path::new("src").join("apis").join("configuration.rs")
        );

        let root_file = SupportingFile::new("README.mustache", "", "README.md");
        assert_eq!(root_file.relative_path(), PathBuf::from("README.md"));
    }

    #[test]
    fn test_resolve_last_registration_wins() {
        let mut files = SupportingFiles::new();
        files.register(SupportingFile::new("README.mustache", "", "README.md"));
        files.register(SupportingFile::new("lib.rs", "src", "lib.rs"));
        files.register(SupportingFile::new("custom_readme.mustache", "", "README.md"));

        let resolved = files.resolve();
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].template, "custom_readme.mustache");
        assert_eq!(resolved[1].template, "lib.rs");
    }

    #[test]
    fn test_resolve_under_root() {
        let root = Path::new("generated-code").join("rust");
        let resolved = SupportingFiles::rust_client().resolve_under(&root);

        assert_eq!(resolved[0].path, root.join("README.md"));
        assert_eq!(
            resolved[7].path,
            root.join("src").join("models").join("mod.rs")
        );
        assert_eq!(resolved[9].path, root.join("Cargo.toml"));
    }

    #[test]
    fn test_template_files() {
        let templates: Vec<_> = RUST_TEMPLATE_FILES
            .iter()
            .map(|t| (t.template, t.extension))
            .collect();
        assert_eq!(
            templates,
            [
                ("model.mustache", ".rs"),
                ("api.mustache", ".rs"),
                ("model_doc.mustache", ".md"),
                ("api_doc.mustache", ".md"),
            ]
        );
    }
}
