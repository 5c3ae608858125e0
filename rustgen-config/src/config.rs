//! Configuration types for rustgen.toml.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

/// Package name used when none is configured.
pub const DEFAULT_PACKAGE_NAME: &str = "swagger";

/// Package version used when none is configured.
pub const DEFAULT_PACKAGE_VERSION: &str = "1.0.0";

/// Output root used when none is configured, as path components.
pub const DEFAULT_OUTPUT_FOLDER: &[&str] = &["generated-code", "rust"];

/// Root configuration for rustgen.toml.
///
/// Built once per run and handed to the generator, which never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generated crate metadata
    #[serde(default)]
    pub package: PackageConfig,

    /// Model naming options
    #[serde(default)]
    pub model: ModelConfig,

    /// Where generated files go
    #[serde(default)]
    pub output: OutputConfig,

    /// Preferred spellings for reserved words (e.g. `type = "kind"`).
    /// Reserved words without an entry are escaped with a leading underscore.
    #[serde(default)]
    pub reserved_words_mappings: IndexMap<String, String>,

    /// Extra or overriding names for symbolic enum values (e.g. `"$" = "Dollar"`).
    #[serde(default)]
    pub symbol_aliases: IndexMap<String, String>,
}

/// `[package]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    #[serde(default = "default_package_name")]
    pub name: String,
    #[serde(default = "default_package_version")]
    pub version: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_package_name(),
            version: default_package_version(),
        }
    }
}

/// `[model]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Joined to model names with `_` (e.g. prefix `api` turns `Pet` into `ApiPet`).
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_folder")]
    pub folder: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder: default_output_folder(),
        }
    }
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

fn default_package_version() -> String {
    DEFAULT_PACKAGE_VERSION.to_string()
}

fn default_output_folder() -> PathBuf {
    DEFAULT_OUTPUT_FOLDER.iter().collect()
}

impl GeneratorConfig {
    /// Override the package name (e.g. from a command-line flag).
    pub fn with_package_name(mut self, name: impl Into<String>) -> Self {
        self.package.name = name.into();
        self
    }

    /// Override the package version.
    pub fn with_package_version(mut self, version: impl Into<String>) -> Self {
        self.package.version = version.into();
        self
    }

    /// Override the output root folder.
    pub fn with_output_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.output.folder = folder.into();
        self
    }

    /// Set the model name prefix and suffix.
    pub fn with_model_affixes(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.model.prefix = prefix.into();
        self.model.suffix = suffix.into();
        self
    }

    /// Add a reserved word remapping.
    pub fn with_reserved_word_mapping(
        mut self,
        word: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.reserved_words_mappings
            .insert(word.into(), replacement.into());
        self
    }
}
