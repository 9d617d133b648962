//! Workspace umbrella crate for jdelta, a structural JSON diff pipeline.
//!
//! This crate stitches the canonical layer (parse, normalize, serialize) and
//! the line-diff layer together so hosts can compare two raw JSON texts with
//! a single call.
//!
//! ## Pipeline
//!
//! ```text
//! raw text (before, after)
//!   → parse            (either side failing short-circuits the run)
//!   → normalize        (same NormalizeConfig applied to both sides)
//!   → canonical text
//!   → diff_lines       (deterministic edit script)
//!   → to_lines / to_text
//! ```
//!
//! Every stage is a synchronous pure function; a run owns its whole value
//! graph and nothing outlives it. Hosts that fire overlapping runs (say, on
//! every keystroke) are responsible for last-issued-wins ordering when
//! displaying results — the library has no state to race on.
//!
//! ## Example
//!
//! ```
//! use jdelta::{compare, NormalizeConfig};
//!
//! let cfg = NormalizeConfig { sort_keys: true, ignore_array_order: false };
//! let script = compare(r#"{"a":1,"b":2}"#, r#"{"b":2,"a":1}"#, &cfg).unwrap();
//! assert!(!script.has_changes());
//! ```

use std::fmt;
use std::time::Instant;

use thiserror::Error;
use tracing::debug;

pub use canonical::{
    normalize, parse, reformat, to_canonical_text, JsonValue, NormalizeConfig, ParseError,
};
pub use linediff::{diff_lines, ChangeKind, EditScript, Hunk, RenderedLine};

/// Which input a pipeline failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Before => f.write_str("before"),
            Side::After => f.write_str("after"),
        }
    }
}

/// Errors that can occur while running the full diff pipeline.
///
/// Parsing is the only fallible stage; everything downstream is total over
/// valid values. The decoder message stays available verbatim through
/// `source()`.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{side} input is not valid JSON: {source}")]
    Parse {
        side: Side,
        #[source]
        source: ParseError,
    },
}

impl PipelineError {
    /// The input the failure refers to.
    pub fn side(&self) -> Side {
        match self {
            PipelineError::Parse { side, .. } => *side,
        }
    }
}

/// Runs the full pipeline: parse both sides, normalize under `cfg`,
/// serialize canonically, and diff line by line.
///
/// A parse failure on either side short-circuits the run ("before" is
/// checked first); normalization and diffing are skipped entirely in that
/// case. Pure and stateless: recompute on any input or option change.
pub fn compare(
    before: &str,
    after: &str,
    cfg: &NormalizeConfig,
) -> Result<EditScript, PipelineError> {
    let start = Instant::now();
    let before_value = parse(before).map_err(|source| PipelineError::Parse {
        side: Side::Before,
        source,
    })?;
    let after_value = parse(after).map_err(|source| PipelineError::Parse {
        side: Side::After,
        source,
    })?;

    let before_text = to_canonical_text(&normalize(before_value, cfg));
    let after_text = to_canonical_text(&normalize(after_value, cfg));
    let script = diff_lines(&before_text, &after_text);

    debug!(
        elapsed_us = start.elapsed().as_micros() as u64,
        hunks = script.hunks.len(),
        changed = script.has_changes(),
        "diff pipeline complete"
    );
    Ok(script)
}

/// [`compare`], rendered as prefixed display text (`"+ "`, `"- "`, `"  "`).
pub fn compare_to_text(
    before: &str,
    after: &str,
    cfg: &NormalizeConfig,
) -> Result<String, PipelineError> {
    Ok(compare(before, after, cfg)?.to_text())
}
