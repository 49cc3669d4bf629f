//! Exact two-level minimization with the Quine-McCluskey method
//!
//! A [`Minimizer`] takes the minterms and don't-cares of a function, as truth
//! table row indices, together with the ordered variable names. It finds all
//! prime implicants by repeatedly merging masks, then selects every cover of
//! minimum size using essential implicants and Petrick's method.
//!
//! Rows are numbered with the first variable as the most significant bit,
//! the same convention as [`crate::truth_table`].
//!
//! # Examples
//!
//! ```
//! use qmc_logic::Minimizer;
//! use std::collections::BTreeSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let minterms: BTreeSet<usize> = [4, 5, 6, 7, 8, 9, 11].into_iter().collect();
//! let dont_cares: BTreeSet<usize> = [2, 3, 12, 15].into_iter().collect();
//! let minimizer = Minimizer::new(&minterms, &dont_cares, &["A", "B", "C", "D"])?;
//!
//! let forms = minimizer.minimal_forms_as_strings()?;
//! assert_eq!(forms.len(), 3);
//! assert_eq!(forms[0], "NOT A AND B OR A AND NOT B AND NOT C OR A AND NOT B AND D");
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The minimizer logs through the `log` facade: a summary of each phase at
//! debug level and the intermediate data of Petrick's method at trace level.
//! Set [`MinimizerConfig::trace_columns`] to also dump every merge column.

mod bitset;
mod config;
mod error;
mod implicants;
mod mask;
mod petrick;
mod table;


pub use config::MinimizerConfig;
pub use error::MinimizerError;
pub use mask::{Mask, Trit};

use crate::expression::BoolExpr;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// One minimal sum of products: the masks of its product terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalForm {
    masks: Vec<Mask>,
}

impl MinimalForm {
    /// The product terms, essential implicants first
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    /// Number of product terms
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// True for the form of a function with no minterms
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Total number of literals over all products
    pub fn literal_count(&self) -> usize {
        self.masks.iter().map(Mask::literal_count).sum()
    }

    /// Build the sum of products over `variables`
    ///
    /// A single product is returned without an OR node and a single literal
    /// without an AND node. The empty form is the constant `false`.
    pub fn to_expr<S: AsRef<str>>(&self, variables: &[S]) -> Result<BoolExpr, MinimizerError> {
        let products = self
            .masks
            .iter()
            .map(|mask| mask.to_expr(variables))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BoolExpr::or_all(products))
    }
}

impl fmt::Display for MinimalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<String> = self.masks.iter().map(Mask::pattern_string).collect();
        write!(f, "[{}]", patterns.join(", "))
    }
}

/// Result of a completed minimization
#[derive(Debug, Clone)]
struct Outcome {
    prime_implicants: Vec<Mask>,
    minimal_forms: Vec<MinimalForm>,
}

/// Quine-McCluskey minimizer with Petrick's method
///
/// All work happens in the constructor; the accessors only read the stored
/// result. A minimizer over an empty variable list holds no result and its
/// form accessors fail with [`MinimizerError::NotReady`].
///
/// A built minimizer is immutable, `Send` and `Sync`.
#[derive(Debug, Clone)]
pub struct Minimizer {
    variables: Vec<Arc<str>>,
    minterms: BTreeSet<usize>,
    dont_cares: BTreeSet<usize>,
    outcome: Option<Outcome>,
}

impl Minimizer {
    /// Minimize with the default configuration
    ///
    /// Fails with [`MinimizerError::InvalidArgument`] when the minterm and
    /// don't-care sets overlap or an index does not fit the variable count.
    pub fn new<S: AsRef<str>>(
        minterms: &BTreeSet<usize>,
        dont_cares: &BTreeSet<usize>,
        variables: &[S],
    ) -> Result<Self, MinimizerError> {
        Self::with_config(minterms, dont_cares, variables, &MinimizerConfig::default())
    }

    /// Minimize with an explicit configuration
    pub fn with_config<S: AsRef<str>>(
        minterms: &BTreeSet<usize>,
        dont_cares: &BTreeSet<usize>,
        variables: &[S],
        config: &MinimizerConfig,
    ) -> Result<Self, MinimizerError> {
        let mut minimizer = Minimizer {
            variables: variables.iter().map(|v| Arc::from(v.as_ref())).collect(),
            minterms: minterms.clone(),
            dont_cares: dont_cares.clone(),
            outcome: None,
        };

        if variables.is_empty() {
            warn!("Cannot minimize a function of no variables");
            return Ok(minimizer);
        }
        if let Some(overlap) = minterms.intersection(dont_cares).next() {
            return Err(MinimizerError::invalid_argument(format!(
                "row {} is both a minterm and a don't-care",
                overlap
            )));
        }

        minimizer.outcome = Some(minimizer.minimize(config)?);
        Ok(minimizer)
    }

    fn minimize(&self, config: &MinimizerConfig) -> Result<Outcome, MinimizerError> {
        let width = self.variables.len();
        debug!(
            "Minimizing {} minterms and {} don't-cares over {} variables",
            self.minterms.len(),
            self.dont_cares.len(),
            width
        );

        let base = self
            .minterms
            .iter()
            .map(|&index| Mask::from_row_index(index, width, false))
            .chain(
                self.dont_cares
                    .iter()
                    .map(|&index| Mask::from_row_index(index, width, true)),
            )
            .collect::<Result<Vec<_>, _>>()?;

        let prime_implicants = implicants::find_prime_implicants(width, base, config)?;
        let covers = petrick::select_minimal_covers(&prime_implicants, &self.minterms, config)?;
        let minimal_forms: Vec<MinimalForm> = covers
            .into_iter()
            .map(|cover| MinimalForm {
                masks: cover.into_iter().map(|i| prime_implicants[i].clone()).collect(),
            })
            .collect();

        for (i, form) in minimal_forms.iter().enumerate() {
            debug!("Minimal form {}: {}", i + 1, form);
        }
        Ok(Outcome {
            prime_implicants,
            minimal_forms,
        })
    }

    /// True when the minimizer holds a result
    pub fn is_ready(&self) -> bool {
        self.outcome.is_some()
    }

    /// Variable names in row-index order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// The minterm rows
    pub fn minterms(&self) -> &BTreeSet<usize> {
        &self.minterms
    }

    /// The don't-care rows
    pub fn dont_cares(&self) -> &BTreeSet<usize> {
        &self.dont_cares
    }

    /// Every prime implicant, in discovery order
    pub fn prime_implicants(&self) -> Result<&[Mask], MinimizerError> {
        self.outcome
            .as_ref()
            .map(|outcome| outcome.prime_implicants.as_slice())
            .ok_or(MinimizerError::NotReady)
    }

    /// Every minimal form as a list of masks
    pub fn minimal_forms(&self) -> Result<&[MinimalForm], MinimizerError> {
        self.outcome
            .as_ref()
            .map(|outcome| outcome.minimal_forms.as_slice())
            .ok_or(MinimizerError::NotReady)
    }

    /// Every minimal form as an expression tree
    ///
    /// A function with no minterms yields exactly one form, the constant
    /// `false`.
    ///
    /// ```
    /// use qmc_logic::{BoolExpr, Minimizer};
    /// use std::collections::BTreeSet;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let minimizer = Minimizer::new(&BTreeSet::new(), &BTreeSet::new(), &["A"])?;
    /// assert_eq!(minimizer.minimal_forms_as_expressions()?, vec![BoolExpr::Constant(false)]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimal_forms_as_expressions(&self) -> Result<Vec<BoolExpr>, MinimizerError> {
        let forms = self.minimal_forms()?;
        if forms.iter().any(MinimalForm::is_empty) {
            return Ok(vec![BoolExpr::Constant(false)]);
        }
        forms
            .iter()
            .map(|form| form.to_expr(&self.variables))
            .collect()
    }

    /// Every minimal form printed as text
    pub fn minimal_forms_as_strings(&self) -> Result<Vec<String>, MinimizerError> {
        Ok(self
            .minimal_forms_as_expressions()?
            .iter()
            .map(BoolExpr::to_string)
            .collect())
    }
}
