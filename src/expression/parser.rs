//! Parsing support for boolean expressions

use super::error::{ExpressionParseError, ParseBoolExprError};
use super::BoolExpr;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/bool_expr.rs"));
}

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Supported syntax:
    /// - `or` or `+` for OR (loosest)
    /// - `xor` or `:+:` for XOR
    /// - `and` or `*` for AND
    /// - `not` or `!` for NOT (tightest)
    /// - Parentheses for grouping
    /// - Constants: `true`, `false`, `1`, `0`
    ///
    /// Keywords are case-insensitive. Variable names start with a letter,
    /// continue with letters, digits or `_`, and are folded to uppercase.
    /// A chain of one operator (`a or b or c`) becomes a single n-ary node.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::{BinaryOp, BoolExpr};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let expr = BoolExpr::parse("a * b + !c")?;
    /// assert_eq!(expr.to_string(), "A AND B OR NOT C");
    ///
    /// let chain = BoolExpr::parse("a or b or c")?;
    /// assert!(matches!(chain, BoolExpr::Binary { op: BinaryOp::Or, ref children } if children.len() == 3));
    ///
    /// assert!(BoolExpr::parse("a and").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseBoolExprError> {
        parser_impl::ExprParser::new().parse(input).map_err(|e| {
            let position = error_position(&e);
            ExpressionParseError::InvalidSyntax {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
                position,
            }
            .into()
        })
    }
}

impl std::str::FromStr for BoolExpr {
    type Err = ParseBoolExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolExpr::parse(s)
    }
}

/// Byte offset at which the parser gave up, when lalrpop reports one
fn error_position<T, E>(error: &ParseError<usize, T, E>) -> Option<usize> {
    match error {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}
