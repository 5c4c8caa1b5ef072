//! Error handling for the election registry
//!
//! The registry's runtime operations signal outcomes through sentinel
//! returns and caller-supplied continuations, never through errors. This
//! type covers the remaining fallible surface: construction-time roster
//! validation and configuration loading.

/// Result type alias for the election registry
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the election registry
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Roster or voter registration errors
    #[error("Registration error: {message}")]
    Registration { message: String },

    /// Validation errors
    #[error("Validation failed: {field}")]
    Validation { field: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create a new registration error
    pub fn registration(message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Convenience macro for creating registration errors
#[macro_export]
macro_rules! registration_error {
    ($msg:expr) => {
        $crate::Error::registration($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::registration(format!($fmt, $($arg)*))
    };
}
