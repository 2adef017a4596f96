use thiserror::Error;

use crate::variant::VariantKind;

/// Every failure the variant and the option filler can report.
///
/// Each error is terminal for the call that raised it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeaplaneError {
    #[error("Argument must begin with '-' (or '+' to disable): {0}")]
    MalformedToken(String),
    #[error("Unexpected option: {0}")]
    UnknownOption(String),
    #[error("Cannot have arguments without data types: {0}")]
    InvalidSchema(String),
    #[error("Missing value for option: {0}")]
    MissingValue(String),
    #[error("Failed to parse {token} as {expected}")]
    ParseFailure {
        token: String,
        expected: &'static str,
    },
    #[error("Cannot assign Variant of type {incoming} to {target}")]
    TypeMismatch {
        target: VariantKind,
        incoming: VariantKind,
    },
    #[error("Wrong type for Variant containing {actual}")]
    WrongType { actual: VariantKind },
}

/// Error kind without payload, for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedToken,
    UnknownOption,
    InvalidSchema,
    MissingValue,
    ParseFailure,
    TypeMismatch,
    WrongType,
}

impl SeaplaneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeaplaneError::MalformedToken(_) => ErrorKind::MalformedToken,
            SeaplaneError::UnknownOption(_) => ErrorKind::UnknownOption,
            SeaplaneError::InvalidSchema(_) => ErrorKind::InvalidSchema,
            SeaplaneError::MissingValue(_) => ErrorKind::MissingValue,
            SeaplaneError::ParseFailure { .. } => ErrorKind::ParseFailure,
            SeaplaneError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            SeaplaneError::WrongType { .. } => ErrorKind::WrongType,
        }
    }
}

pub type SeaplaneResult<T> = Result<T, SeaplaneError>;
