//! # Quine-McCluskey Logic Minimizer
//!
//! This crate computes exact minimal sum-of-products forms of Boolean
//! functions. Prime implicants are found with the Quine-McCluskey tabulation
//! method and the smallest covers are selected with Petrick's method, so
//! every returned form has the fewest product terms possible. When several
//! covers tie, all of them are returned.
//!
//! ## Three Ways to Use the Minimizer
//!
//! ### 1. Minterm Sets
//!
//! Give the rows where the function is true, the don't-care rows and the
//! variable names. The first variable is the most significant bit of a row
//! index.
//!
//! ```
//! use qmc_logic::Minimizer;
//! use std::collections::BTreeSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let minterms: BTreeSet<usize> = [3].into_iter().collect();
//! let minimizer = Minimizer::new(&minterms, &BTreeSet::new(), &["A", "B"])?;
//!
//! assert_eq!(minimizer.prime_implicants()?[0].pattern_string(), "11");
//! assert_eq!(minimizer.minimal_forms_as_strings()?, vec!["A AND B"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. Boolean Expressions
//!
//! Parse or build an expression and minimize it directly:
//!
//! ```
//! use qmc_logic::BoolExpr;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = BoolExpr::parse("a * b + a * b * c + !a * b")?;
//! assert_eq!(expr.minimize()?.to_string(), "B");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Function Definitions
//!
//! The text notation read by the `qmc` command line tool:
//!
//! ```
//! use qmc_logic::FunctionDefinition;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let def: FunctionDefinition = "f(a, b, c) = [1, 3, 5, 7] | [0]".parse()?;
//! let forms = def.minimizer()?.minimal_forms_as_strings()?;
//! assert_eq!(forms, vec!["C"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade and never installs a logger.
//! Phase summaries are written at debug level, the merge columns and the
//! terms of Petrick's method at trace level.
//!
//! ## Thread Safety
//!
//! There is no global state. Every [`Minimizer`] owns its data and is `Send`
//! and `Sync`, so independent minimizations may run on any number of threads.

#![warn(missing_docs)]

pub mod definition;
pub mod error;
pub mod expression;
pub mod qmc;
pub mod truth_table;

pub use definition::{DefinitionError, FunctionDefinition};
pub use error::QmcError;
pub use expression::{
    BinaryOp, BoolExpr, EvaluationError, Evaluator, ExprNode, ExpressionParseError,
    ParseBoolExprError, TreeDisplay, UnaryOp,
};
pub use qmc::{Mask, MinimalForm, Minimizer, MinimizerConfig, MinimizerError, Trit};
