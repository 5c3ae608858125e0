//! Loading configuration and documents from disk.

use std::path::Path;

use eyre::{Context, Result};
use rustgen_config::GeneratorConfig;
use rustgen_ir::Document;

/// Config file picked up from the working directory when `-c` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rustgen.toml";

/// Load `path`, or `./rustgen.toml` if it exists, or the defaults.
pub fn load_config(path: Option<&Path>) -> rustgen_config::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            GeneratorConfig::from_file(DEFAULT_CONFIG_FILE)
        }
        None => {
            tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(GeneratorConfig::default())
        }
    }
}

/// Read a parsed document from a JSON file.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    let document: Document = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(
        models = document.models.len(),
        operations = document.operations.len(),
        "loaded document"
    );
    Ok(document)
}
