//! Error types for boolean expression parsing and evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// A syntax error reported by the expression grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// The input is not a well-formed expression
    InvalidSyntax {
        /// What the grammar expected or found
        message: Arc<str>,
        /// The rejected input
        input: Arc<str>,
        /// Byte offset of the offending token, when known
        position: Option<usize>,
    },
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ExpressionParseError::InvalidSyntax {
            message,
            input,
            position,
        } = self;
        match position {
            Some(pos) => write!(f, "Syntax error at byte {} of {:?}: {}", pos, input, message),
            None => write!(f, "Syntax error in {:?}: {}", input, message),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Error returned by [`BoolExpr::parse`](super::BoolExpr::parse)
#[derive(Debug)]
pub enum ParseBoolExprError {
    /// The grammar rejected the input
    Parse(ExpressionParseError),
}

impl fmt::Display for ParseBoolExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ParseBoolExprError::Parse(e) = self;
        e.fmt(f)
    }
}

impl std::error::Error for ParseBoolExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let ParseBoolExprError::Parse(e) = self;
        Some(e)
    }
}

impl From<ExpressionParseError> for ParseBoolExprError {
    fn from(err: ExpressionParseError) -> Self {
        ParseBoolExprError::Parse(err)
    }
}

impl From<ParseBoolExprError> for io::Error {
    fn from(err: ParseBoolExprError) -> Self {
        let ParseBoolExprError::Parse(e) = err;
        e.into()
    }
}

/// Errors raised while evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The number of supplied values differs from the number of variables
    ValueCountMismatch {
        /// Number of variables the evaluator was built for
        expected: usize,
        /// Number of values supplied
        found: usize,
    },
    /// The expression mentions a variable with no assigned value
    UnknownVariable {
        /// The unassigned variable
        name: Arc<str>,
    },
    /// A truth table over this many variables cannot be enumerated
    TooManyVariables {
        /// Number of variables requested
        count: usize,
        /// Largest supported number of variables
        max: usize,
    },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::ValueCountMismatch { expected, found } => write!(
                f,
                "Wrong number of values: expected {}, found {}",
                expected, found
            ),
            EvaluationError::UnknownVariable { name } => {
                write!(f, "Variable '{}' has no assigned value", name)
            }
            EvaluationError::TooManyVariables { count, max } => write!(
                f,
                "Cannot enumerate a truth table over {} variables (maximum is {})",
                count, max
            ),
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<EvaluationError> for io::Error {
    fn from(err: EvaluationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn syntax_error(position: Option<usize>) -> ExpressionParseError {
        ExpressionParseError::InvalidSyntax {
            message: Arc::from("unexpected token"),
            input: Arc::from("a + + b"),
            position,
        }
    }

    #[test]
    fn test_syntax_error_display() {
        assert_eq!(
            syntax_error(Some(4)).to_string(),
            "Syntax error at byte 4 of \"a + + b\": unexpected token"
        );
        assert_eq!(
            syntax_error(None).to_string(),
            "Syntax error in \"a + + b\": unexpected token"
        );
    }

    #[test]
    fn test_parse_error_wraps_syntax_error() {
        let err: ParseBoolExprError = syntax_error(Some(4)).into();
        assert_eq!(err.to_string(), syntax_error(Some(4)).to_string());
        assert!(err.source().is_some());

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_evaluation_error_display() {
        let err = EvaluationError::UnknownVariable {
            name: Arc::from("Q"),
        };
        assert_eq!(err.to_string(), "Variable 'Q' has no assigned value");

        let err = EvaluationError::TooManyVariables { count: 30, max: 24 };
        assert!(err.to_string().contains("30 variables"));

        let io_err: io::Error = EvaluationError::ValueCountMismatch {
            expected: 3,
            found: 2,
        }
        .into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
