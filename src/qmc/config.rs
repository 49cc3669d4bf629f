//! Minimizer configuration

/// Configuration for a minimization run
///
/// The defaults run the exact algorithm without limits and without column
/// dumps. A configuration is passed to [`Minimizer::with_config`] and is not
/// retained afterwards.
///
/// # Examples
///
/// ```
/// use qmc_logic::{Minimizer, MinimizerConfig};
/// use std::collections::BTreeSet;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = MinimizerConfig::default();
/// config.max_cover_candidates = Some(10_000); // Bound Petrick's method
///
/// let minterms: BTreeSet<usize> = [1, 3].into_iter().collect();
/// let minimizer = Minimizer::with_config(&minterms, &BTreeSet::new(), &["A", "B"], &config)?;
/// assert_eq!(minimizer.minimal_forms_as_strings()?, vec!["B"]);
/// # Ok(())
/// # }
/// ```
///
/// ## Debug Mode
///
/// ```
/// use qmc_logic::MinimizerConfig;
///
/// let mut config = MinimizerConfig::default();
/// config.trace_columns = true; // Dump every merge column at trace level
/// ```
///
/// [`Minimizer::with_config`]: crate::qmc::Minimizer::with_config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Log every column of the prime implicant search
    ///
    /// Columns are written with `log::trace!`, one mask per line, and only
    /// when the trace level is enabled for this crate.
    ///
    /// **Default:** `false`
    pub trace_columns: bool,

    /// Upper bound on the number of intermediate products in Petrick's method
    ///
    /// Distributing the covering formula can grow exponentially with the
    /// number of uncovered minterms. When the set of candidate products
    /// exceeds this bound the minimization fails with
    /// [`MinimizerError::CoverLimitExceeded`] instead of returning a partial
    /// result.
    ///
    /// **Default:** `None` (unbounded)
    ///
    /// [`MinimizerError::CoverLimitExceeded`]: crate::qmc::MinimizerError::CoverLimitExceeded
    pub max_cover_candidates: Option<usize>,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            trace_columns: false,
            max_cover_candidates: None,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
