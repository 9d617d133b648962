//! The structured JSON value type.
//!
//! [`JsonValue`] is a closed sum over the six JSON shapes. Two choices matter
//! for the rest of the pipeline:
//!
//! - Objects are `Vec<(String, JsonValue)>`, not a map, so the parser keeps
//!   document key order. Sorting is an explicit normalization step, never an
//!   accident of the container.
//! - Numbers are [`serde_json::Number`], so integer/float identity and float
//!   formatting follow the decoder rather than a second set of rules.

use std::fmt;

use serde::de::{Deserialize, Deserializer, Error as DeError, MapAccess, SeqAccess, Visitor};
use serde_json::Number;

/// A parsed JSON document.
///
/// Immutable once produced; every pipeline stage consumes a value and returns
/// a fresh one. Structural equality is exact: key order and element order
/// both participate, which is what makes [`normalize`](crate::normalize) a
/// meaningful canonicalization step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JsonValue {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` / `false`.
    Bool(bool),
    /// JSON number, integer or float, as decoded.
    Number(Number),
    /// JSON string.
    String(String),
    /// JSON array, element order as written.
    Array(Vec<JsonValue>),
    /// JSON object, entries in insertion order, keys unique.
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    /// Returns true for null, booleans, numbers, and strings.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is an object.
    pub fn as_object(&self) -> Option<&[(String, JsonValue)]> {
        match self {
            JsonValue::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up an object entry by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON value")
    }

    fn visit_unit<E: DeError>(self) -> Result<JsonValue, E> {
        Ok(JsonValue::Null)
    }

    fn visit_bool<E: DeError>(self, value: bool) -> Result<JsonValue, E> {
        Ok(JsonValue::Bool(value))
    }

    fn visit_i64<E: DeError>(self, value: i64) -> Result<JsonValue, E> {
        Ok(JsonValue::Number(Number::from(value)))
    }

    fn visit_u64<E: DeError>(self, value: u64) -> Result<JsonValue, E> {
        Ok(JsonValue::Number(Number::from(value)))
    }

    fn visit_f64<E: DeError>(self, value: f64) -> Result<JsonValue, E> {
        // serde_json never hands out NaN/inf for JSON text, but the visitor
        // contract still requires the check.
        Number::from_f64(value)
            .map(JsonValue::Number)
            .ok_or_else(|| E::custom("non-finite number"))
    }

    fn visit_str<E: DeError>(self, value: &str) -> Result<JsonValue, E> {
        Ok(JsonValue::String(value.to_owned()))
    }

    fn visit_string<E: DeError>(self, value: String) -> Result<JsonValue, E> {
        Ok(JsonValue::String(value))
    }

    fn visit_seq<A>(self, mut access: A) -> Result<JsonValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element()? {
            items.push(item);
        }
        Ok(JsonValue::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<JsonValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, JsonValue)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, JsonValue>()? {
            // Duplicate keys: last value wins, at the first occurrence's
            // position, matching what a plain decoder-into-map would keep.
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        Ok(JsonValue::Object(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let value = JsonValue::Object(vec![
            ("a".into(), JsonValue::Number(Number::from(1))),
            ("b".into(), JsonValue::Array(vec![JsonValue::Null])),
        ]);
        assert!(!value.is_scalar());
        assert_eq!(value.get("a"), Some(&JsonValue::Number(Number::from(1))));
        assert_eq!(value.get("missing"), None);
        assert_eq!(value.get("b").and_then(JsonValue::as_array).map(|a| a.len()), Some(1));
    }

    #[test]
    fn structural_equality_is_order_sensitive() {
        let ab = JsonValue::Object(vec![
            ("a".into(), JsonValue::Bool(true)),
            ("b".into(), JsonValue::Bool(false)),
        ]);
        let ba = JsonValue::Object(vec![
            ("b".into(), JsonValue::Bool(false)),
            ("a".into(), JsonValue::Bool(true)),
        ]);
        assert_ne!(ab, ba);
    }
}
