//! Staffing requirements
//!
//! Per-role headcount policy checked once per calendar day. The table is
//! configuration: it is loaded by the caller and passed to the detector,
//! never held in a global.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Minimum and maximum number of shifts of one position per day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRequirement {
    /// Role label, matched case-sensitively against `Shift::position`
    pub position: String,
    /// Fewer shifts than this on a day is understaffed
    pub min_staff: u32,
    /// More shifts than this on a day is overstaffed
    pub max_staff: u32,
}

impl StaffingRequirement {
    pub fn new(position: impl Into<String>, min_staff: u32, max_staff: u32) -> Self {
        Self {
            position: position.into(),
            min_staff,
            max_staff,
        }
    }

    /// Checks that the position is named and `min_staff <= max_staff`
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.position.trim().is_empty() {
            return Err(DomainError::EmptyPosition("staffing requirement".to_string()));
        }
        if self.min_staff > self.max_staff {
            return Err(DomainError::InvalidRequirement {
                position: self.position.clone(),
                min: self.min_staff,
                max: self.max_staff,
            });
        }
        Ok(())
    }
}

/// The restaurant's standard staffing table
pub fn default_requirements() -> Vec<StaffingRequirement> {
    vec![
        StaffingRequirement::new("Server", 2, 4),
        StaffingRequirement::new("Chef", 1, 2),
        StaffingRequirement::new("Bartender", 1, 2),
    ]
}
