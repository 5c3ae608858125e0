//! Rust keywords that generated identifiers must avoid.

/// Words the generated Rust code cannot use as plain identifiers.
///
/// Includes keywords reserved for future use and a few historical ones
/// (`alignof`, `offsetof`, `sizeof`, `proc`, `pure`) that older compilers
/// rejected.
pub const RUST_RESERVED_WORDS: &[&str] = &[
    "abstract", "alignof", "as", "become", "box", "break", "const", "continue", "crate", "do",
    "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "offsetof", "override", "priv", "proc", "pub", "pure",
    "ref", "return", "Self", "self", "sizeof", "static", "struct", "super", "trait", "true", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Returns true if `name` is in [`RUST_RESERVED_WORDS`], ignoring case.
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_rust_keyword() {
        assert!(is_rust_keyword("match"));
        assert!(is_rust_keyword("Type"));
        assert!(is_rust_keyword("SELF"));
        assert!(!is_rust_keyword("kind"));
        assert!(!is_rust_keyword(""));
    }
}
