//! Error types for the portal shell

use thiserror::Error;

/// Errors raised while assembling the portal configuration.
///
/// Notebook frames failing to load are not errors in this sense; they are a
/// state of [`crate::frame::FrameLoad`] and are reported in the UI only.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Invalid notebook port '{0}' (expected 1-65535)")]
    InvalidPort(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;
