//! Truth table utilities
//!
//! Rows are numbered the way they appear in a truth table: the first
//! variable is the most significant bit and the last variable changes
//! fastest. Row `i` of a function over `A, B, C` assigns `A` the bit 2 of
//! `i`, `B` bit 1 and `C` bit 0.

use crate::expression::{BoolExpr, EvaluationError, Evaluator};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Largest number of variables a truth table may be enumerated over
pub const MAX_TABLE_VARIABLES: usize = 24;

/// Iterator over every assignment of `n` variables in truth table order
///
/// Created by [`assignments`].
#[derive(Debug, Clone)]
pub struct Assignments {
    width: usize,
    next: usize,
    end: usize,
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = index_to_assignment(self.next, self.width);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

/// Enumerate all `2^width` assignments, from all-false to all-true
///
/// # Examples
///
/// ```
/// use qmc_logic::truth_table::assignments;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let rows: Vec<Vec<bool>> = assignments(2)?.collect();
/// assert_eq!(
///     rows,
///     vec![
///         vec![false, false],
///         vec![false, true],
///         vec![true, false],
///         vec![true, true],
///     ]
/// );
/// # Ok(())
/// # }
/// ```
pub fn assignments(width: usize) -> Result<Assignments, EvaluationError> {
    if width > MAX_TABLE_VARIABLES {
        return Err(EvaluationError::TooManyVariables {
            count: width,
            max: MAX_TABLE_VARIABLES,
        });
    }
    Ok(Assignments {
        width,
        next: 0,
        end: 1usize << width,
    })
}

/// Expand a row index into one value per variable, most significant first
///
/// Positions beyond the bit width of `usize` are false.
pub fn index_to_assignment(index: usize, width: usize) -> Vec<bool> {
    (0..width)
        .map(|position| {
            let bit = width - 1 - position;
            bit < usize::BITS as usize && (index >> bit) & 1 == 1
        })
        .collect()
}

/// Row index of an assignment, the inverse of [`index_to_assignment`]
///
/// ```
/// use qmc_logic::truth_table::assignment_to_index;
///
/// assert_eq!(assignment_to_index(&[false, false, true, true]), 3);
/// ```
pub fn assignment_to_index(values: &[bool]) -> usize {
    values
        .iter()
        .fold(0usize, |acc, &value| (acc << 1) | usize::from(value))
}

/// All assignments under which `expr` evaluates to `expected`, in table order
pub fn filter_assignments<S: AsRef<str>>(
    variables: &[S],
    expr: &BoolExpr,
    expected: bool,
) -> Result<Vec<Vec<bool>>, EvaluationError> {
    let evaluator = Evaluator::new(variables);
    let mut matched = Vec::new();
    for values in assignments(variables.len())? {
        if evaluator.evaluate(expr, &values)? == expected {
            matched.push(values);
        }
    }
    Ok(matched)
}

/// Row indexes at which `expr` is true
///
/// # Examples
///
/// ```
/// use qmc_logic::{truth_table, BoolExpr};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let expr = BoolExpr::parse("a xor b")?;
/// let minterms = truth_table::sum_of_minterms(&["A", "B"], &expr)?;
/// assert_eq!(minterms.into_iter().collect::<Vec<_>>(), vec![1, 2]);
/// # Ok(())
/// # }
/// ```
pub fn sum_of_minterms<S: AsRef<str>>(
    variables: &[S],
    expr: &BoolExpr,
) -> Result<BTreeSet<usize>, EvaluationError> {
    rows_with_value(variables, expr, true)
}

/// Row indexes at which `expr` is false
pub fn product_of_maxterms<S: AsRef<str>>(
    variables: &[S],
    expr: &BoolExpr,
) -> Result<BTreeSet<usize>, EvaluationError> {
    rows_with_value(variables, expr, false)
}

fn rows_with_value<S: AsRef<str>>(
    variables: &[S],
    expr: &BoolExpr,
    expected: bool,
) -> Result<BTreeSet<usize>, EvaluationError> {
    Ok(filter_assignments(variables, expr, expected)?
        .iter()
        .map(|values| assignment_to_index(values))
        .collect())
}

/// Variables of `expr` that are not among `variables`
pub(crate) fn undeclared_variables<S: AsRef<str>>(
    variables: &[S],
    expr: &BoolExpr,
) -> Vec<Arc<str>> {
    expr.collect_variables()
        .into_iter()
        .filter(|name| !variables.iter().any(|v| v.as_ref() == name.as_ref()))
        .collect()
}
