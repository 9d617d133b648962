//! jdelta line-diff layer.
//!
//! Computes deterministic line-level edit scripts between two canonical
//! texts and flattens them for display or export. The differencer is total:
//! any pair of strings produces a script, and the same pair always produces
//! the same script (Myers over lines, no hashing-order dependence).
//!
//! The reconstruction invariant is the load-bearing contract here: removed
//! plus unchanged hunks concatenate back to the "before" text, added plus
//! unchanged to the "after" text. Rendering never invents or drops a line
//! relative to that.

mod render;
mod script;

pub use crate::render::RenderedLine;
pub use crate::script::{diff_lines, ChangeKind, EditScript, Hunk};
