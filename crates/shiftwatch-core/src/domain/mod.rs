//! Domain entities and business rules
//!
//! This module contains the core domain types for ShiftWatch:
//! - Newtypes for identifiers (`ShiftId`, `AlertId`)
//! - Scheduled shifts, per-role staffing requirements and the break policy
//! - Conflict alerts, the sole output of the detection engine
//! - Domain-specific error types

pub mod alert;
pub mod break_policy;
pub mod errors;
pub mod newtypes;
pub mod shift;
pub mod staffing;

// Re-export commonly used types
pub use alert::{AlertKind, AlertType, ConflictAlert, Severity, StaffingDirection};
pub use break_policy::BreakPolicy;
pub use errors::DomainError;
pub use newtypes::{AlertId, ShiftId};
pub use shift::Shift;
pub use staffing::{default_requirements, StaffingRequirement};
