//! Exact minimization of expressions
//!
//! The expression is expanded into its minterms over its own sorted variable
//! list and handed to the [`Minimizer`].

use super::BoolExpr;
use crate::error::QmcError;
use crate::qmc::{Minimizer, MinimizerConfig};
use crate::truth_table;
use std::collections::{BTreeSet, HashMap};

impl BoolExpr {
    /// Minimize to a smallest sum of products
    ///
    /// When several minimal forms exist the first one is returned; see
    /// [`BoolExpr::minimal_forms`] for all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let expr = BoolExpr::parse("a and b or a and b and c or a and not b")?;
    /// assert_eq!(expr.minimize()?.to_string(), "A");
    ///
    /// let tautology = BoolExpr::parse("a or not a")?;
    /// assert_eq!(tautology.minimize()?, BoolExpr::Constant(true));
    /// # Ok(())
    /// # }
    /// ```
    pub fn minimize(&self) -> Result<BoolExpr, QmcError> {
        self.minimize_with_config(&MinimizerConfig::default())
    }

    /// Minimize with an explicit minimizer configuration
    pub fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<BoolExpr, QmcError> {
        let forms = self.minimal_forms_with_config(config)?;
        Ok(forms
            .into_iter()
            .next()
            .unwrap_or(BoolExpr::Constant(false)))
    }

    /// Every smallest sum of products equivalent to this expression
    ///
    /// An expression without variables minimizes to its constant value.
    pub fn minimal_forms(&self) -> Result<Vec<BoolExpr>, QmcError> {
        self.minimal_forms_with_config(&MinimizerConfig::default())
    }

    /// Every smallest sum of products, with an explicit configuration
    pub fn minimal_forms_with_config(&self, config: &MinimizerConfig) -> Result<Vec<BoolExpr>, QmcError> {
        let variables = self.collect_variables();
        if variables.is_empty() {
            let value = self.evaluate(&HashMap::new())?;
            return Ok(vec![BoolExpr::Constant(value)]);
        }

        let minterms = truth_table::sum_of_minterms(&variables, self)?;
        let minimizer = Minimizer::with_config(&minterms, &BTreeSet::new(), &variables, config)?;
        Ok(minimizer.minimal_forms_as_expressions()?)
    }
}
