//! Algorithm configuration
//!
//! [`ExpandConfig`] tunes the expansion passes. The defaults reproduce the
//! classic behaviour; most callers never need to change them.

/// Configuration for the expansion passes
///
/// # Examples
///
/// ```
/// use espresso_expand::ExpandConfig;
///
/// let mut config = ExpandConfig::default();
/// config.mincov_limit = 50;   // give up on the covering solver earlier
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Size guard for the minimum-cover fallback
    ///
    /// Before handing the residual blocking constraint to the unate covering
    /// solver, the blocking rows are unravelled so each fixes a single output
    /// part. When any one row would unravel into more than this many rows, or
    /// the unravelled total would exceed it, the solver is skipped in favour
    /// of the part-frequency heuristic.
    ///
    /// **Default:** `500`
    pub mincov_limit: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        ExpandConfig { mincov_limit: 500 }
    }
}

impl ExpandConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
