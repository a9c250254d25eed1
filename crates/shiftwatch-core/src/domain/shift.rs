//! Shift domain entity
//!
//! A shift is one employee's scheduled work interval. The scheduling UI owns
//! the collection of shifts; the detection engine only ever sees snapshots.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{errors::DomainError, newtypes::ShiftId};

/// A scheduled work assignment
///
/// Serialized with camelCase keys to match the records stored by the
/// backend (`employeeName`, `position`, `start`, `end`, `notes`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Caller-assigned identifier, stable for the shift's lifetime
    pub id: ShiftId,
    /// Free-text name of the assigned worker; the only correlation key
    pub employee_name: String,
    /// Role label, matched exactly against staffing requirements
    pub position: String,
    /// Start of the shift window
    pub start: DateTime<Utc>,
    /// End of the shift window
    pub end: DateTime<Utc>,
    /// Free-text annotation
    #[serde(default)]
    pub notes: String,
}

impl Shift {
    /// Creates a shift with empty notes
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use shiftwatch_core::domain::Shift;
    ///
    /// let shift = Shift::new(
    ///     1,
    ///     "John Doe",
    ///     "Chef",
    ///     Utc.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 3, 20, 17, 0, 0).unwrap(),
    /// );
    /// assert_eq!(shift.duration_hours(), 8.0);
    /// ```
    pub fn new(
        id: impl Into<ShiftId>,
        employee_name: impl Into<String>,
        position: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            employee_name: employee_name.into(),
            position: position.into(),
            start,
            end,
            notes: String::new(),
        }
    }

    /// Sets the notes for this shift
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Length of the shift in fractional hours
    ///
    /// Signed: a shift whose end precedes its start yields a negative value.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }

    /// Calendar date the shift starts on (UTC)
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Returns true if the notes mention `keyword`, ignoring case
    pub fn mentions(&self, keyword: &str) -> bool {
        self.notes
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// Validates the shift the way the scheduling form does before saving
    ///
    /// The detection engine never calls this; it tolerates malformed shifts.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.employee_name.trim().is_empty() {
            return Err(DomainError::EmptyEmployeeName(self.id.to_string()));
        }
        if self.position.trim().is_empty() {
            return Err(DomainError::EmptyPosition(format!("shift {}", self.id)));
        }
        if self.end <= self.start {
            return Err(DomainError::InvalidInterval {
                id: self.id.to_string(),
                start: self.start.to_rfc3339(),
                end: self.end.to_rfc3339(),
            });
        }
        Ok(())
    }
}
