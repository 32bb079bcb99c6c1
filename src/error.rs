//! Error types for sparsemat

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias using sparsemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, computing or saving matrices
#[derive(Error, Debug)]
pub enum Error {
    /// Source file is missing or unreadable
    #[error("The file '{}' could not be found: {source}", .path.display())]
    NotFound {
        /// Path that was being loaded
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// Malformed header or entry line
    #[error("Input file has wrong format at line {line} ({content:?}): {reason}")]
    Format {
        /// 1-based line number
        line: usize,
        /// Offending text, empty when the line is missing
        content: String,
        /// What was expected
        reason: String,
    },

    /// Operand shapes are incompatible with the requested operation
    #[error(
        "Matrices must have compatible dimensions for {op}: {}x{} vs {}x{}",
        .lhs.0, .lhs.1, .rhs.0, .rhs.1
    )]
    ShapeMismatch {
        /// Operation name
        op: &'static str,
        /// Left operand shape (rows, cols)
        lhs: (usize, usize),
        /// Right operand shape (rows, cols)
        rhs: (usize, usize),
    },

    /// Integer overflow while computing an entry
    #[error("Integer overflow during {op} at ({row}, {col})")]
    Overflow {
        /// Operation name
        op: &'static str,
        /// Row of the overflowing entry
        row: usize,
        /// Column of the overflowing entry
        col: usize,
    },

    /// Failure while writing output
    #[error("Error writing to file '{}': {source}", .path.display())]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying cause
        source: std::io::Error,
    },

    /// Operation name not recognized
    #[error("Invalid operation '{0}': expected add, subtract or multiply")]
    UnknownOperation(String),

    /// Worker pool for the parallel multiply could not be created
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    pub(crate) fn format(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NotFound { .. } => ExitCode::from(3),
            Self::Format { .. } => ExitCode::from(4),
            Self::ShapeMismatch { .. } => ExitCode::from(5),
            Self::Overflow { .. } => ExitCode::from(6),
            Self::Io { .. } => ExitCode::from(7),
            Self::UnknownOperation(_) => ExitCode::from(2),
            Self::ThreadPool(_) => ExitCode::from(1),
        }
    }
}
