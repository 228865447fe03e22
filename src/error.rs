//! Error types for Agenda
//!
//! Every directory operation reports failure through `AgendaError`.
//! Lookups never encode "missing" as a zero salary or an empty name.

use thiserror::Error;

/// Result type alias using AgendaError
pub type Result<T> = std::result::Result<T, AgendaError>;

/// Unified error type for Agenda operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("No employee found for {0}")]
    NotFound(String),

    #[error("Directory is empty")]
    Empty,

    #[error("{name} {surname} is the last employee")]
    EndOfDirectory { name: String, surname: String },

    // -------------------------------------------------------------------------
    // Uniqueness Errors
    // -------------------------------------------------------------------------
    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    #[error("Name already in use: {name} {surname}")]
    DuplicateName { name: String, surname: String },

    // -------------------------------------------------------------------------
    // Host Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),
}

impl AgendaError {
    /// True for failures caused by a missing key
    pub fn is_not_found(&self) -> bool {
        matches!(self, AgendaError::NotFound(_))
    }
}
