//! Crate-level error type
//!
//! Each module has its own error enum; [`QmcError`] wraps all of them for
//! callers that chain parsing, evaluation and minimization.

use crate::definition::DefinitionError;
use crate::expression::{EvaluationError, ParseBoolExprError};
use crate::qmc::MinimizerError;
use std::fmt;
use std::io;

/// Any error produced by this crate
///
/// Conversions from the module errors let `?` lift them into this type, and
/// a conversion into `io::Error` lets binaries return `io::Result`.
#[derive(Debug)]
pub enum QmcError {
    /// Minimization failed
    Minimizer(MinimizerError),
    /// An expression failed to parse
    Parse(ParseBoolExprError),
    /// An expression could not be evaluated
    Evaluation(EvaluationError),
    /// A function definition was malformed
    Definition(DefinitionError),
    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for QmcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QmcError::Minimizer(e) => write!(f, "{}", e),
            QmcError::Parse(e) => write!(f, "{}", e),
            QmcError::Evaluation(e) => write!(f, "{}", e),
            QmcError::Definition(e) => write!(f, "{}", e),
            QmcError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QmcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QmcError::Minimizer(e) => Some(e),
            QmcError::Parse(e) => Some(e),
            QmcError::Evaluation(e) => Some(e),
            QmcError::Definition(e) => Some(e),
            QmcError::Io(e) => Some(e),
        }
    }
}

impl From<MinimizerError> for QmcError {
    fn from(err: MinimizerError) -> Self {
        QmcError::Minimizer(err)
    }
}

impl From<ParseBoolExprError> for QmcError {
    fn from(err: ParseBoolExprError) -> Self {
        QmcError::Parse(err)
    }
}

impl From<EvaluationError> for QmcError {
    fn from(err: EvaluationError) -> Self {
        QmcError::Evaluation(err)
    }
}

impl From<DefinitionError> for QmcError {
    fn from(err: DefinitionError) -> Self {
        QmcError::Definition(err)
    }
}

impl From<io::Error> for QmcError {
    fn from(err: io::Error) -> Self {
        QmcError::Io(err)
    }
}

impl From<QmcError> for io::Error {
    fn from(err: QmcError) -> Self {
        match err {
            QmcError::Io(e) => e,
            QmcError::Minimizer(e) => e.into(),
            QmcError::Parse(e) => e.into(),
            QmcError::Evaluation(e) => e.into(),
            QmcError::Definition(e) => e.into(),
        }
    }
}
