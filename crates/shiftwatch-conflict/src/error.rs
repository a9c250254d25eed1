//! Error types for the conflict engine
//!
//! Detection itself is total and never fails. These errors come from
//! building a detector with a bad staffing table or from loading shifts.

use thiserror::Error;

/// Errors that can occur around conflict detection
#[derive(Debug, Error)]
pub enum ConflictError {
    /// A staffing requirement failed validation
    #[error("invalid staffing requirement: {0}")]
    InvalidRequirement(#[from] shiftwatch_core::domain::DomainError),

    /// The same position appears twice in the staffing table
    #[error("duplicate staffing requirement for position '{0}'")]
    DuplicatePosition(String),

    /// The shift source could not produce a snapshot
    #[error("failed to load shifts: {0}")]
    Source(#[from] anyhow::Error),
}
