//! Error handling for the minic toolchain
//!
//! `CompilerError` is what tools see: the frontend lifts its detailed
//! type errors into it, and the driver adds I/O and input failures.

use std::path::Path;
use thiserror::Error;

/// Main error type that encompasses every phase the toolchain runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Type error ({kind}): {message}")]
    TypeError {
        kind: String,
        message: String,
    },

    #[error("Malformed input: {message}")]
    InputError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl CompilerError {
    /// Create a type error
    pub fn type_error(kind: impl Into<String>, message: impl Into<String>) -> Self {
        CompilerError::TypeError {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an input error
    pub fn input_error(message: impl Into<String>) -> Self {
        CompilerError::InputError {
            message: message.into(),
        }
    }

    /// Create an I/O error for a file that could not be read
    pub fn read_error(path: &Path, err: &std::io::Error) -> Self {
        CompilerError::IoError {
            message: format!("failed to read {}: {err}", path.display()),
        }
    }
}
