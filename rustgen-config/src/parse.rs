//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Error, GeneratorConfig, Result, error::SourceContext, validate::validate_config,
};

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "rustgen.toml")
    }
}

impl GeneratorConfig {
    /// Parse a rustgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse a rustgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
fn parse_config(content: &str, filename: &str) -> Result<GeneratorConfig> {
    let source_ctx = SourceContext::new(content, filename);
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: GeneratorConfig = "".parse().unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config: GeneratorConfig = r#"
            [package]
            name = "petstore"
            version = "2.1.0"

            [model]
            prefix = "api"
            suffix = "dto"

            [output]
            folder = "out/client"

            [reserved_words_mappings]
            type = "kind"

            [symbol_aliases]
            "~" = "Approximately"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.package.name, "petstore");
        assert_eq!(config.package.version, "2.1.0");
        assert_eq!(config.model.prefix, "api");
        assert_eq!(config.model.suffix, "dto");
        assert_eq!(config.output.folder, Path::new("out/client"));
        assert_eq!(config.reserved_words_mappings["type"], "kind");
        assert_eq!(config.symbol_aliases["~"], "Approximately");
    }

    #[test]
    fn test_partial_package_section_defaults_version() {
        let config: GeneratorConfig = r#"
            [package]
            name = "petstore"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.package.name, "petstore");
        assert_eq!(config.package.version, "1.0.0");
    }

    #[test]
    fn test_parse_error() {
        let err = "[package\nname = 1".parse::<GeneratorConfig>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = r#"
            [package]
            nmae = "typo"
        "#
        .parse::<GeneratorConfig>()
        .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_empty_package_name_rejected() {
        let err = r#"
            [package]
            name = ""
        "#
        .parse::<GeneratorConfig>()
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_invalid_mapping_rejected() {
        let err = r#"
            [reserved_words_mappings]
            type = "my-kind"
        "#
        .parse::<GeneratorConfig>()
        .unwrap_err();

        match *err {
            Error::InvalidIdentifier { name, span, .. } => {
                assert_eq!(name, "my-kind");
                assert!(span.is_some());
            }
            other => panic!("expected InvalidIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn test_reserved_replacement_rejected() {
        let err = "[reserved_words_mappings]\ntype = \"match\"\n"
            .parse::<GeneratorConfig>()
            .unwrap_err();

        match *err {
            Error::ReservedKeyword { name, span, .. } => {
                assert_eq!(name, "match");
                assert!(span.is_some());
            }
            other => panic!("expected ReservedKeyword, got {other:?}"),
        }
    }

    #[test]
    fn test_digit_replacement_rejected() {
        let err = "[reserved_words_mappings]\ntype = \"1kind\"\n"
            .parse::<GeneratorConfig>()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[package]\nname = \"from_disk\"").unwrap();

        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.package.name, "from_disk");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
