//! Error types for Dockhand operations.
//!
//! This module defines [`DockhandError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DockhandError` for store errors that need distinct handling
//! - Use `anyhow::Error` (via `DockhandError::Other`) for unexpected errors
//! - Store read/write failures are logged and degrade to "no state change";
//!   they are only surfaced to callers that opt into the fallible API

use thiserror::Error;

/// Core error type for Dockhand operations.
#[derive(Debug, Error)]
pub enum DockhandError {
    /// Failed to parse a stored value.
    #[error("Failed to parse stored value for '{key}': {message}")]
    StoreParse { key: String, message: String },

    /// Failed to serialize a value for storage.
    #[error("Failed to serialize value for '{key}': {message}")]
    StoreSerialize { key: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Dockhand operations.
pub type Result<T> = std::result::Result<T, DockhandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_parse_displays_key_and_message() {
        let err = DockhandError::StoreParse {
            key: "notifications".into(),
            message: "expected array".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("notifications"));
        assert!(msg.contains("expected array"));
    }

    #[test]
    fn store_serialize_displays_key() {
        let err = DockhandError::StoreSerialize {
            key: "dockets".into(),
            message: "bad value".into(),
        };
        assert!(err.to_string().contains("dockets"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DockhandError = io_err.into();
        assert!(matches!(err, DockhandError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DockhandError::StoreParse {
                key: "k".into(),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
