//! Evaluation of boolean expressions

use super::error::EvaluationError;
use super::{BinaryOp, BoolExpr, UnaryOp};
use crate::truth_table;
use std::collections::HashMap;
use std::sync::Arc;

impl BoolExpr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Every variable in the expression must have a value in `assignment`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let expr = BoolExpr::parse("a and not b")?;
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("A"), true);
    /// assignment.insert(Arc::from("B"), false);
    /// assert!(expr.evaluate(&assignment)?);
    ///
    /// assignment.insert(Arc::from("B"), true);
    /// assert!(!expr.evaluate(&assignment)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, EvaluationError> {
        self.evaluate_with(&|name| assignment.get(name).copied())
    }

    /// Check whether two expressions agree under every assignment
    ///
    /// The truth table is enumerated over the union of both variable sets.
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let lhs = BoolExpr::parse("not (a or b)")?;
    /// let rhs = BoolExpr::parse("!a * !b")?;
    /// assert!(lhs.equivalent_to(&rhs)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> Result<bool, EvaluationError> {
        let mut variables = self.collect_variables();
        variables.extend(other.collect_variables());
        variables.sort();
        variables.dedup();

        let evaluator = Evaluator::new(&variables);
        for values in truth_table::assignments(variables.len())? {
            if evaluator.evaluate(self, &values)? != evaluator.evaluate(other, &values)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluate with a lookup function resolving variable names to values
    pub(crate) fn evaluate_with<F>(&self, lookup: &F) -> Result<bool, EvaluationError>
    where
        F: Fn(&str) -> Option<bool>,
    {
        match self {
            BoolExpr::Constant(value) => Ok(*value),
            BoolExpr::Variable(name) => {
                lookup(name.as_ref()).ok_or_else(|| EvaluationError::UnknownVariable {
                    name: Arc::clone(name),
                })
            }
            BoolExpr::Unary {
                op: UnaryOp::Not,
                child,
            } => Ok(!child.evaluate_with(lookup)?),
            BoolExpr::Binary { op, children } => {
                let mut result = op.identity();
                for (i, child) in children.iter().enumerate() {
                    let value = child.evaluate_with(lookup)?;
                    result = if i == 0 { value } else { op.apply(result, value) };
                    // AND/OR short-circuit; XOR needs every operand
                    match (op, result) {
                        (BinaryOp::And, false) | (BinaryOp::Or, true) => return Ok(result),
                        _ => {}
                    }
                }
                Ok(result)
            }
        }
    }
}

/// Evaluates expressions over a fixed variable ordering
///
/// Values are supplied positionally, one per variable, which is how truth
/// table rows are enumerated.
///
/// # Examples
///
/// ```
/// use qmc_logic::{BoolExpr, Evaluator};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let expr = BoolExpr::parse("a xor b")?;
/// let evaluator = Evaluator::new(&["A", "B"]);
///
/// assert!(!evaluator.evaluate(&expr, &[false, false])?);
/// assert!(evaluator.evaluate(&expr, &[false, true])?);
/// assert!(evaluator.evaluate(&expr, &[true]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    positions: HashMap<Arc<str>, usize>,
    len: usize,
}

impl Evaluator {
    /// Create an evaluator for the given variable ordering
    pub fn new<S: AsRef<str>>(variables: &[S]) -> Self {
        let positions: HashMap<Arc<str>, usize> = variables
            .iter()
            .enumerate()
            .map(|(i, name)| (Arc::from(name.as_ref()), i))
            .collect();
        Self {
            positions,
            len: variables.len(),
        }
    }

    /// Number of variables this evaluator expects values for
    pub fn num_variables(&self) -> usize {
        self.len
    }

    /// Evaluate `expr` with `values[i]` assigned to the i-th variable
    pub fn evaluate(&self, expr: &BoolExpr, values: &[bool]) -> Result<bool, EvaluationError> {
        if values.len() != self.len {
            return Err(EvaluationError::ValueCountMismatch {
                expected: self.len,
                found: values.len(),
            });
        }
        expr.evaluate_with(&|name| self.positions.get(name).map(|&i| values[i]))
    }
}
