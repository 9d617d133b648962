//! Configuration for JSON normalization.
//!
//! [`NormalizeConfig`] selects the equivalence relation under which two
//! documents count as "the same". Both toggles apply uniformly at every
//! nesting depth, and both default to off so the default pipeline compares
//! documents exactly as written (modulo canonical pretty-printing).

use serde::{Deserialize, Serialize};

/// Equivalence options for [`normalize`](crate::normalize).
///
/// A pure configuration value: cheap to clone, serializable, and never stored
/// by the pipeline between runs.
///
/// # Examples
///
/// ```rust
/// use canonical::NormalizeConfig;
///
/// let exact = NormalizeConfig::default();
/// assert!(!exact.sort_keys);
/// assert!(!exact.ignore_array_order);
///
/// let loose = NormalizeConfig {
///     sort_keys: true,
///     ignore_array_order: true,
/// };
/// # let _ = loose;
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// If true, re-emit object entries in ascending key order at every depth.
    ///
    /// With this set, `{"a":1,"b":2}` and `{"b":2,"a":1}` normalize to the
    /// same value. With it unset, insertion order is preserved and the two
    /// documents diff as different.
    pub sort_keys: bool,

    /// If true, reorder array elements by the lexicographic order of each
    /// element's own canonical serialization.
    ///
    /// Order becomes a function of normalized content, not original position:
    /// two arrays holding the same multiset of (recursively normalized)
    /// elements serialize identically regardless of how they were written.
    /// Note the sort key is a string, so `10` orders before `2`.
    pub ignore_array_order: bool,
}

impl NormalizeConfig {
    /// Both toggles on; the loosest equivalence this crate offers.
    pub fn structural() -> Self {
        Self {
            sort_keys: true,
            ignore_array_order: true,
        }
    }
}
