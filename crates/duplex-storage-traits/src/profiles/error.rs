//! Error types for the profiles module

use std::fmt;

/// Error types for the profiles module
#[derive(Debug)]
pub enum ProfileError {
    /// Invalid parameters
    InvalidParameters(String),
    /// Database error
    DatabaseError(String),
}

impl std::error::Error for ProfileError {}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters(message) => write!(f, "Invalid parameters: {}", message),
            Self::DatabaseError(message) => write!(f, "Database error: {}", message),
        }
    }
}
