//! Bottom-up traversal of expression trees

use super::{BinaryOp, BoolExpr, UnaryOp};

/// One node seen by [`BoolExpr::fold`], children already folded
///
/// N-ary nodes carry one result per child, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Logical AND with results from every child
    And(Vec<T>),
    /// Logical OR with results from every child
    Or(Vec<T>),
    /// Exclusive OR with results from every child
    Xor(Vec<T>),
    /// Logical NOT with result from the inner subtree
    Not(T),
    /// A constant boolean value
    Constant(bool),
}

impl BoolExpr {
    /// Reduce the tree to a single value, leaves first
    ///
    /// `f` runs once per node and receives the values already computed for
    /// that node's children.
    ///
    /// # Examples
    ///
    /// Count the number of operators in an expression:
    ///
    /// ```
    /// use qmc_logic::{BoolExpr, ExprNode};
    ///
    /// let a = BoolExpr::variable("A");
    /// let b = BoolExpr::variable("B");
    /// let expr = a.and(&b.not());
    ///
    /// let op_count = expr.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(c) | ExprNode::Or(c) | ExprNode::Xor(c) => c.iter().sum::<usize>() + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    ///
    /// assert_eq!(op_count, 2);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self {
            BoolExpr::Constant(value) => f(ExprNode::Constant(*value)),
            BoolExpr::Variable(name) => f(ExprNode::Variable(name)),
            BoolExpr::Unary {
                op: UnaryOp::Not,
                child,
            } => {
                let inner = child.fold_impl(f);
                f(ExprNode::Not(inner))
            }
            BoolExpr::Binary { op, children } => {
                let results: Vec<T> = children.iter().map(|child| child.fold_impl(f)).collect();
                match op {
                    BinaryOp::And => f(ExprNode::And(results)),
                    BinaryOp::Or => f(ExprNode::Or(results)),
                    BinaryOp::Xor => f(ExprNode::Xor(results)),
                }
            }
        }
    }
}
