//! Escaping for text embedded in generated source.

/// Remove double quotes so the text cannot terminate a string literal.
pub fn escape_quotation_mark(input: &str) -> String {
    input.replace('"', "")
}

/// Break up comment delimiters so the text cannot close or open a block comment.
pub fn escape_unsafe_characters(input: &str) -> String {
    input.replace("*/", "*_/").replace("/*", "/_*")
}

/// Make arbitrary text safe inside a Rust string literal.
///
/// Tabs and line breaks become spaces, backslashes and double quotes are
/// escaped, and comment delimiters are broken up.
pub fn escape_text(input: &str) -> String {
    let flattened: String = input
        .chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            c => c,
        })
        .collect();

    escape_unsafe_characters(&flattened.replace('\\', "\\\\").replace('"', "\\\""))
}
