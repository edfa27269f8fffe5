//! Centralized error types for skillmatch.

use thiserror::Error;

/// Main error type for skillmatch domain operations.
#[derive(Error, Debug)]
pub enum SkillMatchError {
    #[error("Node name is empty after normalization (was {0:?})")]
    EmptyName(String),

    #[error("Skill adjacency self-loop rejected: {0}")]
    SelfLoop(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type for skillmatch domain operations.
pub type SkillMatchResult<T> = Result<T, SkillMatchError>;

impl SkillMatchError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
