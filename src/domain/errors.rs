//! Rule failures for single domain values.

use thiserror::Error;

/// A value rejected by one of the value-object constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ID cannot be empty")]
    EmptyId,

    /// Blank after trimming
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Anything but exactly ten ASCII digits
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),
}
