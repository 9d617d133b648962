//! Recursive canonicalization under [`NormalizeConfig`].

use crate::config::NormalizeConfig;
use crate::serialize::to_canonical_text;
use crate::value::JsonValue;

/// Rewrites a value into the canonical form selected by `cfg`.
///
/// Pure, total, and idempotent: `normalize(normalize(v, cfg), cfg)` equals
/// `normalize(v, cfg)` for every value. Scalars pass through unchanged;
/// containers are normalized bottom-up so that every reordering decision is
/// made over already-canonical children.
///
/// Two values normalize to the same output exactly when they are equal up to
/// key order (if `sort_keys`) and array element order (if
/// `ignore_array_order`), at every nesting depth.
pub fn normalize(value: JsonValue, cfg: &NormalizeConfig) -> JsonValue {
    match value {
        JsonValue::Array(items) => {
            let mut items: Vec<JsonValue> =
                items.into_iter().map(|item| normalize(item, cfg)).collect();
            if cfg.ignore_array_order {
                // Order by each element's own canonical serialization. Sorting
                // after child normalization is what makes elements that are
                // equal-under-options, but written differently, land in the
                // same slot. The key is a string, so 10 sorts before 2.
                items.sort_by_cached_key(to_canonical_text);
            }
            JsonValue::Array(items)
        }
        JsonValue::Object(entries) => {
            let mut entries: Vec<(String, JsonValue)> = entries
                .into_iter()
                .map(|(key, value)| (key, normalize(value, cfg)))
                .collect();
            if cfg.sort_keys {
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            }
            JsonValue::Object(entries)
        }
        scalar => scalar,
    }
}
