//! Error types
//!
//! Domain-specific error types for the credential store.

use std::fmt;
use std::io;

/// Persistence layer errors
#[derive(Debug)]
pub enum PersistenceError {
    IoError(io::Error),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<io::Error> for PersistenceError {
    fn from(error: io::Error) -> Self {
        PersistenceError::IoError(error)
    }
}
