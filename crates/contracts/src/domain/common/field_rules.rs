//! Synonym-resolution rules for backend payloads
//!
//! The admin API does not fix its response shape: the same logical field can
//! arrive under several names (`status`, `approved`, `is_approved`, ...) and
//! in several encodings (`true`, `1`, `"1"`, `"TRUE"`). Every record type
//! describes each of its fields as a [`FieldRule`]: an ordered list of keys
//! where the first present, non-null value wins. Resolution and coercion never
//! fail; a missing or unusable value degrades to the field's default.

use serde_json::Value;

/// Ordered list of backend key synonyms for one logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Canonical field name (for diagnostics and tests)
    pub field: &'static str,
    /// Backend keys, in priority order
    pub keys: &'static [&'static str],
}

impl FieldRule {
    pub const fn new(field: &'static str, keys: &'static [&'static str]) -> Self {
        Self { field, keys }
    }

    /// First value among the synonyms that is present and not `null`.
    ///
    /// Returns `None` for non-object payloads.
    pub fn resolve<'a>(&self, raw: &'a Value) -> Option<&'a Value> {
        let object = raw.as_object()?;
        self.keys
            .iter()
            .find_map(|key| object.get(*key).filter(|value| !value.is_null()))
    }

    /// Key that supplied the value, if any
    pub fn matched_key(&self, raw: &Value) -> Option<&'static str> {
        let object = raw.as_object()?;
        self.keys
            .iter()
            .copied()
            .find(|key| object.get(*key).is_some_and(|value| !value.is_null()))
    }

    /// Resolve as a strict boolean, defaulting to `false`
    pub fn flag(&self, raw: &Value) -> bool {
        self.resolve(raw).map(coerce_flag).unwrap_or(false)
    }

    /// Resolve as text, defaulting to an empty string
    pub fn text(&self, raw: &Value) -> String {
        self.resolve(raw).map(coerce_text).unwrap_or_default()
    }

    /// Resolve as optional text; empty strings count as absent
    pub fn optional_text(&self, raw: &Value) -> Option<String> {
        self.resolve(raw)
            .map(coerce_text)
            .filter(|text| !text.is_empty())
    }

    /// Resolve as an integer, defaulting to `0`
    pub fn integer(&self, raw: &Value) -> i64 {
        self.resolve(raw).map(coerce_integer).unwrap_or(0)
    }
}

/// Boolean coercion used for every status-like field.
///
/// - booleans pass through
/// - numbers: only `1` is true
/// - strings: trimmed, case-insensitive `"1"` or `"true"` are true
/// - anything else is false
pub fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() == Some(1.0),
        Value::String(text) => {
            let text = text.trim().to_ascii_lowercase();
            text == "1" || text == "true"
        }
        _ => false,
    }
}

/// Text coercion: strings as-is, scalars stringified, composites empty
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

/// Integer coercion: numbers truncate, numeric strings parse, else `0`
pub fn coerce_integer(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| {
                    text.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f as i64)
                })
                .unwrap_or(0)
        }
        Value::Bool(flag) => i64::from(*flag),
        _ => 0,
    }
}
