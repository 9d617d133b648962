//! Decoding untrusted text into a [`JsonValue`].

use crate::error::ParseError;
use crate::serialize::to_canonical_text;
use crate::value::JsonValue;

/// Parses one JSON document, after trimming surrounding whitespace.
///
/// Malformed input (including empty text) comes back as a [`ParseError`]
/// value rather than a panic; no partial or recovery parsing is attempted.
pub fn parse(text: &str) -> Result<JsonValue, ParseError> {
    let value = serde_json::from_str(text.trim())?;
    Ok(value)
}

/// Reparses a document and pretty-prints it in canonical form, without
/// applying any normalization options.
///
/// This backs a host's "format" action: presentation is cleaned up, key and
/// element order stay exactly as written.
pub fn reformat(text: &str) -> Result<String, ParseError> {
    let value = parse(text)?;
    Ok(to_canonical_text(&value))
}
