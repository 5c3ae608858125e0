//! Shared string utilities for identifier normalization.

/// Convert a string to PascalCase (e.g., "phone_number" -> "PhoneNumber").
///
/// The first character and every character following an underscore are
/// uppercased and the underscores are dropped. A trailing underscore is kept.
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut upper_next = true;

    while let Some(c) = chars.next() {
        if c == '_' && chars.peek().is_some() {
            upper_next = true;
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to snake_case (e.g., "PetId" -> "pet_id").
///
/// Acronyms are kept together ("HTTPServer" -> "http_server"), digits followed
/// by an uppercase letter start a new word ("v2Api" -> "v2_api"), and `-` or
/// spaces become underscores. `.` turns into `/` and `$` into `__`, so callers
/// that need a plain identifier should sanitize first.
pub fn to_snake_case(s: &str) -> String {
    let word = s.replace('.', "/").replace('$', "__");
    let chars: Vec<char> = word.chars().collect();

    // "HTTPServer" -> "HTTP_Server"
    let mut acronyms_split = Vec::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0
            && c.is_ascii_uppercase()
            && chars[i - 1].is_ascii_uppercase()
            && chars.get(i + 1).is_some_and(char::is_ascii_lowercase)
            && chars.get(i + 2).is_some_and(char::is_ascii_lowercase)
        {
            acronyms_split.push('_');
        }
        acronyms_split.push(c);
    }

    // "petId" -> "pet_Id", "v2Api" -> "v2_Api"
    let mut result = String::with_capacity(acronyms_split.len() + 4);
    let mut prev: Option<char> = None;
    for c in acronyms_split {
        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            result.push('_');
        }
        match c {
            '-' | ' ' => result.push('_'),
            _ => result.extend(c.to_lowercase()),
        }
        prev = Some(c);
    }
    result
}

/// Strip everything that cannot appear in an identifier.
///
/// Brackets, parentheses, dots, dashes and spaces become word separators;
/// any other character outside `[A-Za-z0-9_]` is removed. A lone `$` maps to
/// `"value"`.
pub fn sanitize_name(name: &str) -> String {
    if name == "$" {
        return "value".to_string();
    }

    name.replace("[]", "")
        .chars()
        .filter_map(|c| match c {
            '[' | '(' | '.' | '-' | ' ' => Some('_'),
            ']' | ')' => None,
            c if c.is_ascii_alphanumeric() || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

/// Returns true if the first character is an ASCII digit.
pub fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("phone_number"), "PhoneNumber");
        assert_eq!(to_pascal_case("model_200_response"), "Model200Response");
        assert_eq!(to_pascal_case("_private"), "Private");
        assert_eq!(to_pascal_case("trailing_"), "Trailing_");
        assert_eq!(to_pascal_case("get"), "Get");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("PetId"), "pet_id");
        assert_eq!(to_snake_case("PetApi"), "pet_api");
        assert_eq!(to_snake_case("created-at"), "created_at");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_snake_case_acronyms() {
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("getHTTPResponseCode"), "get_http_response_code");
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("v2Api"), "v2_api");
    }

    #[test]
    fn test_to_snake_case_separators() {
        assert_eq!(to_snake_case("first name"), "first_name");
        assert_eq!(to_snake_case("a$b"), "a__b");
        assert_eq!(to_snake_case("pkg.Name"), "pkg/name");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("$"), "value");
        assert_eq!(sanitize_name("input[]"), "input");
        assert_eq!(sanitize_name("input[a][b]"), "input_a_b");
        assert_eq!(sanitize_name("input(a)(b)"), "input_a_b");
        assert_eq!(sanitize_name("input.name"), "input_name");
        assert_eq!(sanitize_name("created-at"), "created_at");
        assert_eq!(sanitize_name("name and age"), "name_and_age");
        assert_eq!(sanitize_name("$php_variable"), "php_variable");
        assert_eq!(sanitize_name("ünïcode"), "ncode");
    }

    #[test]
    fn test_starts_with_digit() {
        assert!(starts_with_digit("200"));
        assert!(starts_with_digit("1st"));
        assert!(!starts_with_digit("var_200"));
        assert!(!starts_with_digit(""));
    }
}
