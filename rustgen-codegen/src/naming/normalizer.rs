//! Identifier normalization for variables, models, APIs and operations.

use rustgen_core::{Diagnostics, sanitize_name, starts_with_digit, to_pascal_case, to_snake_case};

use super::{Naming, PHASE};

/// `^[A-Z_]*$` with at least one character: already constant-style.
fn is_constant_style(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

impl Naming {
    /// Variable (field) name, e.g. `created-at` -> `created_at`, `type` -> `_type`.
    ///
    /// Names that are already all uppercase and underscores are kept as-is.
    pub fn to_var_name(&self, raw: &str, diags: &mut Diagnostics) -> String {
        let name = sanitize_name(&raw.replace('-', "_"));

        if name.is_empty() {
            diags.warning(
                PHASE,
                format!("'{}' has no identifier characters. Renamed to var_empty", raw),
            );
            return "var_empty".to_string();
        }

        if is_constant_style(&name) {
            return name;
        }

        let mut name = to_snake_case(&name);

        if self.is_reserved(&name) {
            let escaped = self.escape_reserved_word(&name);
            diags.info(
                PHASE,
                format!("{} (reserved word) escaped to {}", name, escaped),
            );
            name = escaped;
        }

        if starts_with_digit(&name) {
            let prefixed = format!("var_{}", name);
            diags.info(
                PHASE,
                format!("{} (starts with number) renamed to {}", name, prefixed),
            );
            name = prefixed;
        }

        name
    }

    /// Parameter name. Same rules as [`Naming::to_var_name`].
    pub fn to_param_name(&self, raw: &str, diags: &mut Diagnostics) -> String {
        self.to_var_name(raw, diags)
    }

    /// Model file name (snake_case, without extension).
    ///
    /// Applies the configured prefix/suffix, then prefixes `model_` when the
    /// result is reserved or starts with a digit (`return` -> `model_return`,
    /// `200Response` -> `model_200_response`).
    pub fn to_model_filename(&self, raw: &str, diags: &mut Diagnostics) -> String {
        let mut name = raw.to_string();
        if !self.model_prefix.is_empty() {
            name = format!("{}_{}", self.model_prefix, name);
        }
        if !self.model_suffix.is_empty() {
            name = format!("{}_{}", name, self.model_suffix);
        }

        let mut name = sanitize_name(&name);

        if name.is_empty() {
            diags.warning(
                PHASE,
                format!(
                    "'{}' cannot be used as model name. Renamed to model_empty",
                    raw
                ),
            );
            name = "model_empty".to_string();
        }

        if self.is_reserved(&name) {
            let renamed = format!("model_{}", name);
            diags.warning(
                PHASE,
                format!(
                    "{} (reserved word) cannot be used as model name. Renamed to {}",
                    name, renamed
                ),
            );
            name = renamed;
        }

        if starts_with_digit(&name) {
            let renamed = format!("model_{}", name);
            diags.warning(
                PHASE,
                format!(
                    "{} (model name starts with number) cannot be used as model name. Renamed to {}",
                    name, renamed
                ),
            );
            name = renamed;
        }

        to_snake_case(&name)
    }

    /// Model type name, e.g. `phone-number` -> `PhoneNumber`.
    pub fn to_model_name(&self, raw: &str, diags: &mut Diagnostics) -> String {
        to_pascal_case(&self.to_model_filename(raw, diags))
    }

    /// Model documentation file name (without extension).
    pub fn to_model_doc_filename(&self, raw: &str, diags: &mut Diagnostics) -> String {
        self.to_model_name(raw, diags)
    }

    /// API file name (without extension).
    ///
    /// The `_api` suffix is always appended, so a tag that already ends in
    /// `Api` keeps both: `PetApi` -> `pet_api_api`.
    pub fn to_api_filename(&self, raw: &str) -> String {
        format!("{}_api", to_snake_case(&sanitize_name(raw)))
    }

    /// API type name, e.g. `pet` -> `PetApi`. An empty tag yields `DefaultApi`.
    pub fn to_api_name(&self, raw: &str) -> String {
        if raw.is_empty() {
            return "DefaultApi".to_string();
        }
        format!("{}Api", to_pascal_case(&sanitize_name(raw)))
    }

    /// API documentation file name (without extension).
    pub fn to_api_doc_filename(&self, raw: &str) -> String {
        self.to_api_name(raw)
    }

    /// Method name for an operation, e.g. `getPetById` -> `get_pet_by_id`.
    ///
    /// Reserved or digit-leading ids get a `call_` prefix.
    pub fn to_operation_id(&self, raw: &str, diags: &mut Diagnostics) -> String {
        let mut name = sanitize_name(raw);

        if name.is_empty() {
            diags.warning(
                PHASE,
                format!(
                    "'{}' cannot be used as method name. Renamed to call_empty",
                    raw
                ),
            );
            return "call_empty".to_string();
        }

        if self.is_reserved(&name) {
            let renamed = format!("call_{}", name);
            diags.warning(
                PHASE,
                format!(
                    "{} (reserved word) cannot be used as method name. Renamed to {}",
                    raw,
                    to_snake_case(&renamed)
                ),
            );
            name = renamed;
        }

        if starts_with_digit(&name) {
            let renamed = format!("call_{}", name);
            diags.warning(
                PHASE,
                format!(
                    "{} (method name starts with number) cannot be used as method name. Renamed to {}",
                    raw,
                    to_snake_case(&renamed)
                ),
            );
            name = renamed;
        }

        to_snake_case(&name)
    }
}
