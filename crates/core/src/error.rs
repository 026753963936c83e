//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised synchronously by validating constructors. A failed construction never
/// yields a partially built value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Raw input could not be turned into a valid domain primitive.
    #[error("invalid format: {0}")]
    InvalidFormat(FormatViolation),
}

impl DomainError {
    pub fn invalid_format(violation: FormatViolation) -> Self {
        Self::InvalidFormat(violation)
    }

    /// The validation stage that rejected the input.
    pub fn violation(&self) -> FormatViolation {
        match self {
            DomainError::InvalidFormat(v) => *v,
        }
    }
}

/// Which validation stage rejected a raw input.
///
/// Stages run from cheapest to most specific, so the first failing stage is the
/// most useful diagnostic.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormatViolation {
    #[error("empty input")]
    EmptyInput,

    #[error("wrong digit count")]
    WrongDigitCount,

    #[error("pattern mismatch")]
    PatternMismatch,

    #[error("checksum mismatch")]
    ChecksumMismatch,
}
