//! Error types for CLT Solver

use thiserror::Error;

/// Main error type for lamination computations
#[derive(Error, Debug)]
pub enum CLTError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Non-positive modulus: {name} = {value}")]
    NonPositiveModulus { name: &'static str, value: f64 },

    #[error("Non-positive ply thickness: {0}")]
    NonPositiveThickness(f64),

    #[error("At least one ply required")]
    EmptyLaminate,

    #[error("Degenerate laminate stiffness: {0}")]
    DegenerateStiffness(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Broad classification of a failure
///
/// `InvalidInput` failures can be fixed by re-entering the offending record.
/// `Domain` failures abort the current computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Domain,
}

impl CLTError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CLTError::InvalidInput(_)
            | CLTError::IoError(_)
            | CLTError::SerializationError(_) => ErrorKind::InvalidInput,
            CLTError::NonPositiveModulus { .. }
            | CLTError::NonPositiveThickness(_)
            | CLTError::EmptyLaminate
            | CLTError::DegenerateStiffness(_) => ErrorKind::Domain,
        }
    }

    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }
}

/// Result type for CLT operations
pub type CLTResult<T> = Result<T, CLTError>;

/// Reject a modulus that is not strictly positive
pub(crate) fn check_modulus(name: &'static str, value: f64) -> CLTResult<f64> {
    check_finite(name, value)?;
    if value <= 0.0 {
        return Err(CLTError::NonPositiveModulus { name, value });
    }
    Ok(value)
}

/// Reject NaN and infinities
pub(crate) fn check_finite(name: &str, value: f64) -> CLTResult<f64> {
    if !value.is_finite() {
        return Err(CLTError::InvalidInput(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(value)
}
