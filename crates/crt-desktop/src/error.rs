//! Error types for the desktop core
//!
//! Pointer routing never surfaces these to the host; they are returned
//! by the direct API (`close_window`, `restore`, config loading, ...)
//! and absorbed by the router as logged no-ops.

use crate::types::{IconId, WindowId};

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// Window with the given ID was not found
    WindowNotFound(WindowId),

    /// Icon with the given ID was not found
    IconNotFound(IconId),

    /// A window kind identifier did not match any template
    UnknownWindowKind(String),

    /// A resize handle identifier did not match any handle
    UnknownResizeHandle(String),

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// What the value must satisfy
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::IconNotFound(id) => write!(f, "icon not found: {}", id),
            Self::UnknownWindowKind(kind) => write!(f, "unknown window kind: {}", kind),
            Self::UnknownResizeHandle(handle) => write!(f, "unknown resize handle: {}", handle),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::WindowNotFound(42);
        assert_eq!(err.to_string(), "window not found: 42");

        let err = DesktopError::IconNotFound(3);
        assert_eq!(err.to_string(), "icon not found: 3");

        let err = DesktopError::UnknownWindowKind("paint".to_string());
        assert_eq!(err.to_string(), "unknown window kind: paint");

        let err = DesktopError::InvalidOperation {
            op: "restore",
            reason: "window is not maximized",
        };
        assert_eq!(
            err.to_string(),
            "invalid operation 'restore': window is not maximized"
        );

        let err = DesktopError::InvalidConfig {
            field: "grid.cell_size",
            reason: "must be a positive number",
        };
        assert_eq!(
            err.to_string(),
            "invalid config 'grid.cell_size': must be a positive number"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = DesktopError::WindowNotFound(42);
        let err2 = DesktopError::WindowNotFound(42);
        let err3 = DesktopError::WindowNotFound(43);

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
