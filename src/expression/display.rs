//! Display formatting for boolean expressions

use super::{BinaryOp, BoolExpr};
use std::fmt;

/// Number of spaces each tree level is indented by
const TREE_INDENT: usize = 2;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    /// Top level or inside parentheses
    None,
    /// Operand of an n-ary operator
    Binary(BinaryOp),
    /// Operand of NOT
    Not,
}

impl BoolExpr {
    /// Format with operator precedence context to minimize parentheses
    ///
    /// Every operator token is written out; parentheses appear only where a
    /// child binds looser than its parent, or around a compound under NOT.
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            BoolExpr::Constant(value) => write!(f, "{}", value),
            BoolExpr::Variable(name) => write!(f, "{}", name),
            BoolExpr::Unary { op, child } => {
                write!(f, "{} ", op)?;
                child.fmt_with_context(f, OpContext::Not)
            }
            BoolExpr::Binary { op, children } => {
                let needs_parens = match ctx {
                    OpContext::None => false,
                    OpContext::Not => true,
                    OpContext::Binary(parent) => op.precedence() < parent.precedence(),
                };

                if needs_parens {
                    write!(f, "(")?;
                }
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", op)?;
                    }
                    child.fmt_with_context(f, OpContext::Binary(*op))?;
                }
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }

    /// Render the expression as an indented tree
    ///
    /// Each node is printed on its own line, children indented two spaces
    /// deeper than their parent. Constants print as `1`/`0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let expr = BoolExpr::parse("a or not b")?;
    /// assert_eq!(expr.tree().to_string(), "OR\n  A\n  NOT\n    B\n");
    /// # Ok(())
    /// # }
    /// ```
    pub fn tree(&self) -> TreeDisplay<'_> {
        TreeDisplay { expr: self }
    }
}

/// Display formatting for boolean expressions
///
/// Uses `AND`, `OR`, `XOR` and `NOT` tokens separated by single spaces, and
/// `true`/`false` for constants. The output re-parses to an equivalent tree.
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

/// Indented tree rendering returned by [`BoolExpr::tree`]
#[derive(Debug, Clone, Copy)]
pub struct TreeDisplay<'a> {
    expr: &'a BoolExpr,
}

impl TreeDisplay<'_> {
    fn fmt_level(expr: &BoolExpr, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = level)?;
        match expr {
            BoolExpr::Constant(value) => writeln!(f, "{}", if *value { "1" } else { "0" }),
            BoolExpr::Variable(name) => writeln!(f, "{}", name),
            BoolExpr::Unary { op, child } => {
                writeln!(f, "{}", op)?;
                Self::fmt_level(child, f, level + TREE_INDENT)
            }
            BoolExpr::Binary { op, children } => {
                writeln!(f, "{}", op)?;
                for child in children {
                    Self::fmt_level(child, f, level + TREE_INDENT)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_level(self.expr, f, 0)
    }
}
