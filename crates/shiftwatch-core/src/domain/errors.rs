//! Domain error types
//!
//! This module defines error types raised by caller-side validation of
//! shifts, staffing requirements and identifiers. The detection engine
//! itself never produces these.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Shift has a blank employee name
    #[error("Employee name must not be empty (shift {0})")]
    EmptyEmployeeName(String),

    /// Shift or requirement has a blank position label
    #[error("Position must not be empty: {0}")]
    EmptyPosition(String),

    /// Shift ends at or before it starts
    #[error("Shift {id} ends at or before it starts ({start} >= {end})")]
    InvalidInterval {
        /// The offending shift id
        id: String,
        /// Start timestamp (RFC 3339)
        start: String,
        /// End timestamp (RFC 3339)
        end: String,
    },

    /// Staffing requirement whose minimum exceeds its maximum
    #[error("Invalid staffing requirement for {position}: min {min} exceeds max {max}")]
    InvalidRequirement {
        /// Position label
        position: String,
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },

    /// ID parsing error
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}
