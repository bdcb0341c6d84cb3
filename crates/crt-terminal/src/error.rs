//! Error types for the terminal filesystem.

use serde::{Deserialize, Serialize};

/// Errors from filesystem operations.
///
/// The `Display` text is what the prompt prints on an error line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsError {
    /// File not found in the directory
    NotFound(String),

    /// Path is not a directory
    NotADirectory(String),

    /// Entry is not a file
    NotAFile(String),
}

impl FsError {
    /// Create a not-found error for a file name.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

impl core::fmt::Display for FsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FsError::NotFound(name) => write!(f, "File '{}' not found", name),
            FsError::NotADirectory(_) => write!(f, "Directory not found"),
            FsError::NotAFile(name) => write!(f, "'{}' is not a file", name),
        }
    }
}

impl std::error::Error for FsError {}
