//! Layout error taxonomy
//!
//! Generation is a pure function of a seed and a parameter set, so there are
//! no transient failures: every error is a precondition or contract violation.

use thiserror::Error;

use crate::geometry::Rect;

/// Errors surfaced by configuration and generation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("No rooms have been generated")]
    NoRooms,

    #[error("Partition {rect} is too small to split")]
    DegeneratePartition { rect: Rect },

    #[error("Could not load configuration: {0}")]
    Config(String),
}

impl LayoutError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LayoutError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self {
        LayoutError::Config(err.to_string())
    }
}

/// Result alias used across the crate
pub type LayoutResult<T> = Result<T, LayoutError>;
