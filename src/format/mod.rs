//! Normalizers that reshape raw upstream payloads into the canonical models.
//!
//! Raw payloads are plain `serde_json::Value`s. Every read goes through
//! [`Fields`], whose accessors are total: a missing key, a `null`, a value of
//! the wrong type, or a receiver that is not an object at all all produce the
//! zero value for the requested type. Normalizers therefore never fail.

pub mod album;
pub mod artist;
pub mod autocomplete;
pub mod image;
pub mod lyrics;
pub mod playlist;
pub mod search;
pub mod song;

use serde_json::Value;

static NULL: Value = Value::Null;

/// Null-safe field access on loosely typed upstream JSON.
pub trait Fields {
    /// Trimmed text form of the value at `key`, or `""`.
    fn str_field(&self, key: &str) -> String;

    /// Numeric value at `key`, else the base-10 parse of its text, else `0`.
    fn int_field(&self, key: &str) -> i64;

    /// `true` for a JSON `true` or the strings `"true"` and `"1"`.
    fn bool_field(&self, key: &str) -> bool;

    /// The object at `key`, or `null` when absent or not an object.
    fn obj_field(&self, key: &str) -> &Value;

    /// The array at `key`, or an empty slice.
    fn list_field(&self, key: &str) -> &[Value];
}

impl Fields for Value {
    fn str_field(&self, key: &str) -> String {
        match self.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.trim().to_owned(),
            Some(other) => other.to_string().trim().to_owned(),
        }
    }

    fn int_field(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(Value::Number(number)) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|float| float as i64))
                .unwrap_or(0),
            _ => self.str_field(key).parse().unwrap_or(0),
        }
    }

    fn bool_field(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(flag)) => *flag,
            _ => matches!(self.str_field(key).as_str(), "true" | "1"),
        }
    }

    fn obj_field(&self, key: &str) -> &Value {
        self.get(key).filter(|value| value.is_object()).unwrap_or(&NULL)
    }

    fn list_field(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Reads a field from `primary`, falling back to `secondary` when the
/// primary value is empty. Upstream scatters the same key across the top
/// level and `more_info` depending on the endpoint.
#[derive(Clone, Copy)]
pub(crate) struct Fallback<'a> {
    pub primary: &'a Value,
    pub secondary: &'a Value,
}

impl<'a> Fallback<'a> {
    pub fn new(primary: &'a Value, secondary: &'a Value) -> Self {
        Self { primary, secondary }
    }

    pub fn string(&self, key: &str) -> String {
        let value = self.primary.str_field(key);
        if value.is_empty() {
            self.secondary.str_field(key)
        } else {
            value
        }
    }

    /// First non-empty value among `keys`.
    pub fn first_string(&self, keys: &[&str]) -> String {
        keys.iter()
            .map(|key| self.string(key))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }

    pub fn object(&self, key: &str) -> &'a Value {
        let value = self.primary.obj_field(key);
        if value.is_null() {
            self.secondary.obj_field(key)
        } else {
            value
        }
    }

    pub fn int(&self, key: &str) -> i64 {
        match self.primary.int_field(key) {
            0 => self.secondary.int_field(key),
            value => value,
        }
    }

    pub fn flag(&self, key: &str) -> bool {
        self.primary.bool_field(key) || self.secondary.bool_field(key)
    }
}

/// Object elements of a list, skipping anything else.
pub(crate) fn objects(list: &[Value]) -> impl Iterator<Item = &Value> {
    list.iter().filter(|value| value.is_object())
}
