//! Post-parse validation of configuration values.

use miette::SourceSpan;
use rustgen_core::is_rust_keyword;

use crate::{GeneratorConfig, Result, error::SourceContext};

/// Validate a parsed configuration against its source.
pub(crate) fn validate_config(config: &GeneratorConfig, ctx: &SourceContext) -> Result<()> {
    if config.package.name.trim().is_empty() {
        return Err(ctx.validation_error(
            "package name cannot be empty",
            find_key_span(ctx.src(), "name"),
        ));
    }

    if config.package.version.trim().is_empty() {
        return Err(ctx.validation_error(
            "package version cannot be empty",
            find_key_span(ctx.src(), "version"),
        ));
    }

    for (word, replacement) in &config.reserved_words_mappings {
        if let Some(reason) = validate_identifier(replacement) {
            return Err(ctx.invalid_identifier_error(
                replacement,
                format!("replacement for reserved word '{}'", word),
                reason,
                find_value_span(ctx.src(), replacement),
            ));
        }
        if is_rust_keyword(replacement) {
            return Err(ctx.reserved_keyword_error(
                replacement,
                format!("replacement for reserved word '{}'", word),
                find_value_span(ctx.src(), replacement),
            ));
        }
    }

    for (symbol, alias) in &config.symbol_aliases {
        if let Some(reason) = validate_identifier(alias) {
            return Err(ctx.invalid_identifier_error(
                alias,
                format!("alias for symbol '{}'", symbol),
                reason,
                find_value_span(ctx.src(), alias),
            ));
        }
    }

    Ok(())
}

/// Find a `key =` assignment in the TOML source.
///
/// Offsets count the full line terminator, so `\r\n` files point at the
/// same text as `\n` files.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.split_inclusive('\n')
        .scan(0, |offset, raw| {
            let start = *offset;
            *offset += raw.len();
            Some((start, raw.trim_end_matches(['\r', '\n'])))
        })
        .find(|(_, line)| {
            let trimmed = line.trim_start();
            trimmed
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|(start, line)| {
            let indent = line.len() - line.trim_start().len();
            SourceSpan::from((start + indent, line.trim().len()))
        })
}

/// Find a quoted string value in the TOML source.
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos, quoted.len())))
}

/// Validate that a name is a plain identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return Some("name must start with a letter or underscore");
    }

    if chars.any(|c| !c.is_ascii_alphanumeric() && c != '_') {
        return Some("name contains invalid characters");
    }

    None
}
