//! jdelta canonical layer.
//!
//! This crate turns untrusted JSON text into a deterministic, option-aware
//! canonical rendering. The line differencer downstream relies on it for a
//! simple guarantee: documents that are equal under the active options
//! produce byte-identical text.
//!
//! ## What we do
//!
//! - Decode one JSON document per input (surrounding whitespace trimmed),
//!   failures returned as values with the decoder message intact
//! - Preserve object key order at parse time so order handling is explicit
//! - Normalize recursively: optional key sorting, optional array reordering
//!   by each element's own canonical serialization
//! - Pretty-print with one fixed convention (two-space indent)
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale or platform dependence. Same text and
//! config, same output, on any machine, forever.
//!
//! ## Invariants worth knowing
//!
//! - [`normalize`] is total and idempotent over every [`JsonValue`] shape
//! - [`to_canonical_text`] is injective on normalized values: equal text
//!   if and only if equal structure
//! - Only [`parse`] can fail; everything after it is infallible

mod config;
mod error;
mod normalize;
mod parse;
mod serialize;
mod value;

pub use crate::config::NormalizeConfig;
pub use crate::error::ParseError;
pub use crate::normalize::normalize;
pub use crate::parse::{parse, reformat};
pub use crate::serialize::to_canonical_text;
pub use crate::value::JsonValue;
