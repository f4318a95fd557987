//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Lookup or update against an identifier that is not stored.
    #[error("Task with ID {0} not found.")]
    NotFound(String),

    /// Malformed creation input.
    #[error("Invalid task creation: {0}")]
    InvalidCreation(String),

    /// Malformed identifier or status on update/delete.
    #[error("Invalid task. {0}")]
    InvalidUpdate(String),
}

impl TaskError {
    /// The payload carried by the error, without the kind prefix
    pub fn detail(&self) -> &str {
        match self {
            Self::NotFound(detail) | Self::InvalidCreation(detail) | Self::InvalidUpdate(detail) => {
                detail
            }
        }
    }
}
