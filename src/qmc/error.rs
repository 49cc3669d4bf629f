//! Error types for the Quine-McCluskey minimizer

use std::fmt;
use std::io;

/// Errors raised while building masks or minimizing a function
///
/// Every variant is surfaced to the immediate caller. A minimization either
/// completes or fails with one of these; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizerError {
    /// Malformed or out-of-domain input
    ///
    /// Bad bit width, row index out of range, empty index set, overlapping
    /// minterm and don't-care sets, or a variable name count that does not
    /// match the pattern width.
    InvalidArgument {
        /// Description of what was invalid
        message: String,
    },
    /// Two masks of different widths were combined
    ///
    /// This always means masks from different minimizations were mixed.
    DimensionMismatch {
        /// Width of the receiving mask
        expected: usize,
        /// Width of the other mask
        found: usize,
    },
    /// A required minterm has no covering prime implicant
    ///
    /// Cannot happen after a correct prime implicant search; the minimization
    /// is aborted rather than returning a wrong cover.
    InvariantViolation {
        /// Description of the broken invariant
        message: String,
    },
    /// Minimal forms were requested from a minimizer that produced no result
    ///
    /// This is the state of a minimizer built over an empty variable list.
    NotReady,
    /// Petrick's method produced more intermediate products than allowed
    ///
    /// Only raised when [`MinimizerConfig::max_cover_candidates`] is set.
    ///
    /// [`MinimizerConfig::max_cover_candidates`]: crate::qmc::MinimizerConfig::max_cover_candidates
    CoverLimitExceeded {
        /// The configured limit
        limit: usize,
    },
}

impl MinimizerError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        MinimizerError::InvalidArgument {
            message: message.into(),
        }
    }
}

impl fmt::Display for MinimizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizerError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
            MinimizerError::DimensionMismatch { expected, found } => write!(
                f,
                "Cannot combine masks of different widths: expected {}, found {}",
                expected, found
            ),
            MinimizerError::InvariantViolation { message } => {
                write!(f, "Minimizer invariant violated: {}", message)
            }
            MinimizerError::NotReady => write!(
                f,
                "Minimization produced no result (the variable list was empty)"
            ),
            MinimizerError::CoverLimitExceeded { limit } => write!(
                f,
                "Petrick's method exceeded the limit of {} candidate covers",
                limit
            ),
        }
    }
}

impl std::error::Error for MinimizerError {}

impl From<MinimizerError> for io::Error {
    fn from(err: MinimizerError) -> Self {
        let kind = match err {
            MinimizerError::InvalidArgument { .. } | MinimizerError::DimensionMismatch { .. } => {
                io::ErrorKind::InvalidInput
            }
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}
