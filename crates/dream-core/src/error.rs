//! Error Types
//!
//! Raised only at parse and configuration boundaries. Collection
//! transitions never fail; they degrade to no-ops.

use thiserror::Error;

/// Common result type for parse/config operations
pub type DreamResult<T> = Result<T, DreamError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DreamError {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
    #[error("unknown filter: {0:?}")]
    UnknownFilter(String),
    #[error("invalid tracker state: {0}")]
    InvalidTracker(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
