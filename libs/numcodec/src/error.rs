//! Codec Error Types
//!
//! Every decode failure is a caller precondition violation; there is nothing
//! to retry and no partial result.

use thiserror::Error;

/// Result type for numcodec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// The precondition a byte sequence failed
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Operation needs at least one byte
    #[error("non-empty byte sequence required")]
    Empty,

    /// Exact-width operation got the wrong number of bytes
    #[error("expected exactly {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input violated the operation's precondition
    #[error("Invalid argument to {operation}: {violation}")]
    InvalidArgument {
        operation: &'static str,
        violation: Violation,
    },
}

// Helper methods for creating errors
impl CodecError {
    pub fn empty(operation: &'static str) -> Self {
        CodecError::InvalidArgument {
            operation,
            violation: Violation::Empty,
        }
    }

    pub fn length_mismatch(operation: &'static str, expected: usize, actual: usize) -> Self {
        CodecError::InvalidArgument {
            operation,
            violation: Violation::LengthMismatch { expected, actual },
        }
    }

    /// Name of the function that rejected its input
    pub fn operation(&self) -> &'static str {
        match self {
            CodecError::InvalidArgument { operation, .. } => operation,
        }
    }

    pub fn violation(&self) -> Violation {
        match self {
            CodecError::InvalidArgument { violation, .. } => *violation,
        }
    }
}
