//! Break-time policy
//!
//! Labour rule for long shifts: a shift longer than the threshold must have
//! a break scheduled, documented by a keyword in the shift notes.

use serde::{Deserialize, Serialize};

/// Threshold and documentation rule for mandated breaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakPolicy {
    /// Shifts strictly longer than this many hours need a break
    pub max_hours_without_break: f64,
    /// Length of the required break, quoted in alert messages
    pub required_break_minutes: u32,
    /// Case-insensitive substring of `notes` that documents a break
    pub note_keyword: String,
}

impl Default for BreakPolicy {
    fn default() -> Self {
        Self {
            max_hours_without_break: 6.0,
            required_break_minutes: 30,
            note_keyword: "break".to_string(),
        }
    }
}
