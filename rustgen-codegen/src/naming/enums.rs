//! Enum type, variant and value names.

use rustgen_core::{Diagnostics, sanitize_name, starts_with_digit, to_snake_case};
use rustgen_ir::Property;

use super::{Naming, PHASE, escape_text};

/// Datatypes whose enum literals are numbers, by OpenAPI tag or Rust type.
pub const NUMERIC_DATATYPES: &[&str] = &[
    "int", "integer", "long", "float", "double", "number", "i8", "i16", "i32", "i64", "u8", "u16",
    "u32", "u64", "f32", "f64",
];

/// Names for enum literals that are pure punctuation.
pub const DEFAULT_SYMBOL_ALIASES: &[(&str, &str)] = &[
    ("$", "Dollar"),
    ("^", "Caret"),
    ("|", "Pipe"),
    ("=", "Equal"),
    ("*", "Star"),
    ("-", "Minus"),
    ("&", "Ampersand"),
    ("%", "Percent"),
    ("#", "Hash"),
    ("@", "At"),
    ("!", "Exclamation"),
    ("+", "Plus"),
    (":", "Colon"),
    (">", "Greater_Than"),
    ("<", "Less_Than"),
    (".", "Period"),
    ("_", "Underscore"),
    ("?", "Question_Mark"),
    (",", "Comma"),
    ("'", "Quote"),
    ("\"", "Double_Quote"),
    ("/", "Slash"),
    ("\\", "Back_Slash"),
    ("(", "Left_Parenthesis"),
    (")", "Right_Parenthesis"),
    ("{", "Left_Curly_Bracket"),
    ("}", "Right_Curly_Bracket"),
    ("[", "Left_Square_Bracket"),
    ("]", "Right_Square_Bracket"),
    ("~", "Tilde"),
    ("`", "Backtick"),
    ("<=", "Less_Than_Or_Equal_To"),
    (">=", "Greater_Than_Or_Equal_To"),
    ("!=", "Not_Equal"),
];

/// Returns true if enum literals of this datatype are numbers.
pub fn is_numeric_datatype(datatype: &str) -> bool {
    NUMERIC_DATATYPES.contains(&datatype)
}

impl Naming {
    /// The alias for a symbolic literal, if one is configured.
    pub fn symbol_name(&self, value: &str) -> Option<&str> {
        self.symbols.get(value).map(String::as_str)
    }

    /// Enum variant name for a literal value.
    ///
    /// - `""` -> `EMPTY`
    /// - numbers spell out signs and dots: `-5` -> `MINUS_5`, `1.5` -> `1_DOT_5`
    /// - symbols use their alias: `>=` -> `GREATER_THAN_OR_EQUAL_TO`
    /// - anything else becomes SCREAMING_SNAKE_CASE: `sold out` -> `SOLD_OUT`
    pub fn to_enum_var_name(
        &self,
        value: &str,
        datatype: &str,
        diags: &mut Diagnostics,
    ) -> String {
        if value.is_empty() {
            return "EMPTY".to_string();
        }

        if is_numeric_datatype(datatype) {
            return value
                .replace('-', "MINUS_")
                .replace('+', "PLUS_")
                .replace('.', "_DOT_");
        }

        if let Some(alias) = self.symbol_name(value) {
            return alias.to_uppercase();
        }

        let upper = sanitize_name(&to_snake_case(value).to_uppercase());
        let trimmed = upper.strip_prefix('_').unwrap_or(&upper);
        let trimmed = trimmed.strip_suffix('_').unwrap_or(trimmed);

        if trimmed.is_empty() {
            diags.warning(
                PHASE,
                format!("enum value '{}' has no identifier characters. Named EMPTY", value),
            );
            return "EMPTY".to_string();
        }

        if self.is_reserved(trimmed) || starts_with_digit(trimmed) {
            let escaped = self.escape_reserved_word(trimmed);
            diags.info(
                PHASE,
                format!("enum variant {} escaped to {}", trimmed, escaped),
            );
            return escaped;
        }

        trimmed.to_string()
    }

    /// Enum type name for a property, e.g. `status` -> `STATUS`.
    pub fn to_enum_name(&self, property: &Property, diags: &mut Diagnostics) -> String {
        let name = to_snake_case(&self.to_model_name(&property.name, diags))
            .to_uppercase()
            .replace("[]", "");

        if starts_with_digit(&name) {
            format!("_{}", name)
        } else {
            name
        }
    }

    /// Sentinel constant naming an enum default, e.g. `STATUS_AVAILABLE`.
    ///
    /// Not validated as an identifier.
    pub fn to_enum_default_value(&self, value: &str, datatype: &str) -> String {
        format!("{}_{}", datatype, value)
    }

    /// Literal text for an enum value.
    ///
    /// Numbers are emitted verbatim; everything else is escaped for a string literal.
    pub fn to_enum_value(&self, value: &str, datatype: &str) -> String {
        if is_numeric_datatype(datatype) {
            value.to_string()
        } else {
            escape_text(value)
        }
    }
}
