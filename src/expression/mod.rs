//! Boolean expression trees
//!
//! This module provides [`BoolExpr`], a plain tree representation of Boolean
//! expressions with four node kinds: constants, variables, the unary NOT and
//! n-ary AND/OR/XOR operators. Trees are produced by the parser
//! ([`BoolExpr::parse`]), by the minimizer (one tree per minimal form) or
//! programmatically.
//!
//! # Quick Start
//!
//! ```
//! use qmc_logic::BoolExpr;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = BoolExpr::parse("(c + a) xor (a or b)")?;
//!
//! // Variable names are folded to uppercase and sorted
//! let vars = expr.collect_variables();
//! let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
//! assert_eq!(names, vec!["A", "B", "C"]);
//!
//! println!("{}", expr); // (C OR A) XOR (A OR B)
//! # Ok(())
//! # }
//! ```
//!
//! # Tree walkers
//!
//! All walkers match on the node kind directly:
//!
//! - [`BoolExpr::evaluate`] and [`Evaluator`] compute the value under an assignment
//! - [`BoolExpr::collect_variables`] lists the variables in sorted order
//! - `Display` prints infix text, [`BoolExpr::tree`] prints an indented tree
//! - [`BoolExpr::fold`] is the general bottom-up traversal

mod ast;
mod display;
pub mod error;
mod eval;
mod minimize;
mod operators;
mod parser;

pub use ast::ExprNode;
pub use display::TreeDisplay;
pub use error::{EvaluationError, ExpressionParseError, ParseBoolExprError};
pub use eval::Evaluator;

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical negation
    Not,
}

/// N-ary operators
///
/// A binary node holds at least two children; the operator is applied as a
/// left fold over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Logical conjunction
    And,
    /// Logical disjunction
    Or,
    /// Exclusive or (parity of the children)
    Xor,
}

impl BinaryOp {
    /// Apply the operator to two values
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
            BinaryOp::Xor => lhs ^ rhs,
        }
    }

    /// Value of the operator over zero operands
    pub(crate) fn identity(self) -> bool {
        matches!(self, BinaryOp::And)
    }

    /// Binding strength, loosest first
    pub(crate) fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::Xor => 2,
            BinaryOp::And => 3,
        }
    }

    /// The token used when printing the operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Xor => "XOR",
        }
    }
}

impl UnaryOp {
    /// The token used when printing the operator
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "NOT",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A Boolean expression tree
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("A");
/// let b = BoolExpr::variable("B");
/// let c = BoolExpr::variable("C");
///
/// let expr = a.and(&b.not()).or(&c);
/// assert_eq!(expr.to_string(), "A AND NOT B OR C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoolExpr {
    /// A constant value
    Constant(bool),
    /// A named variable
    Variable(Arc<str>),
    /// A unary operator applied to one child
    Unary {
        /// The operator
        op: UnaryOp,
        /// The operand
        child: Box<BoolExpr>,
    },
    /// An n-ary operator applied to two or more children
    Binary {
        /// The operator
        op: BinaryOp,
        /// The operands, in source order
        children: Vec<BoolExpr>,
    },
}

impl BoolExpr {
    /// Create a variable expression
    ///
    /// The name is used as given; only the parser folds names to uppercase.
    pub fn variable(name: &str) -> Self {
        BoolExpr::Variable(Arc::from(name))
    }

    /// Create a constant expression
    pub fn constant(value: bool) -> Self {
        BoolExpr::Constant(value)
    }

    /// Logical AND of two expressions
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::Binary {
            op: BinaryOp::And,
            children: vec![self.clone(), other.clone()],
        }
    }

    /// Logical OR of two expressions
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::Binary {
            op: BinaryOp::Or,
            children: vec![self.clone(), other.clone()],
        }
    }

    /// Exclusive OR of two expressions
    pub fn xor(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::Binary {
            op: BinaryOp::Xor,
            children: vec![self.clone(), other.clone()],
        }
    }

    /// Logical NOT of this expression
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> BoolExpr {
        BoolExpr::Unary {
            op: UnaryOp::Not,
            child: Box::new(self.clone()),
        }
    }

    /// N-ary node over `children`
    ///
    /// A single child is returned unchanged and an empty list becomes the
    /// operator's identity constant, so the result never holds fewer than two
    /// children.
    pub fn nary(op: BinaryOp, mut children: Vec<BoolExpr>) -> BoolExpr {
        match children.len() {
            0 => BoolExpr::Constant(op.identity()),
            1 => children.remove(0),
            _ => BoolExpr::Binary { op, children },
        }
    }

    /// Conjunction of all `children`
    pub fn and_all(children: Vec<BoolExpr>) -> BoolExpr {
        Self::nary(BinaryOp::And, children)
    }

    /// Disjunction of all `children`
    pub fn or_all(children: Vec<BoolExpr>) -> BoolExpr {
        Self::nary(BinaryOp::Or, children)
    }

    /// Build a chain `first op rest[0] op rest[1] ...` as one n-ary node
    pub(crate) fn chain(op: BinaryOp, first: BoolExpr, rest: Vec<BoolExpr>) -> BoolExpr {
        if rest.is_empty() {
            return first;
        }
        let mut children = Vec::with_capacity(rest.len() + 1);
        children.push(first);
        children.extend(rest);
        BoolExpr::Binary { op, children }
    }

    /// Collect all variable names used in this expression
    ///
    /// Names are unique and sorted lexicographically.
    pub fn collect_variables(&self) -> Vec<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_variables_into(&mut vars);
        vars.into_iter().collect()
    }

    fn collect_variables_into(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self {
            BoolExpr::Constant(_) => {}
            BoolExpr::Variable(name) => {
                vars.insert(Arc::clone(name));
            }
            BoolExpr::Unary { child, .. } => child.collect_variables_into(vars),
            BoolExpr::Binary { children, .. } => {
                for child in children {
                    child.collect_variables_into(vars);
                }
            }
        }
    }

    /// Number of variable occurrences in the expression
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let expr = BoolExpr::parse("a and not b or a")?;
    /// assert_eq!(expr.literal_count(), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn literal_count(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Variable(_) => 1,
            ExprNode::Constant(_) => 0,
            ExprNode::Not(inner) => inner,
            ExprNode::And(children) | ExprNode::Or(children) | ExprNode::Xor(children) => {
                children.into_iter().sum()
            }
        })
    }
}
