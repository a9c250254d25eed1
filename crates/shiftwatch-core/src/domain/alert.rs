//! Conflict alert domain entities
//!
//! A `ConflictAlert` is the unit of output of the detection engine. Its
//! payload is a tagged variant: overlap and break alerts carry the shifts
//! they implicate, staffing alerts carry the day/position aggregate and no
//! shifts at all.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{newtypes::AlertId, shift::Shift};

/// How urgently an alert needs attention
///
/// Ordered: `Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// Discriminant of an alert, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Overlap,
    Staffing,
    Break,
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlertType::Overlap => "overlap",
            AlertType::Staffing => "staffing",
            AlertType::Break => "break",
        };
        write!(f, "{s}")
    }
}

/// Which side of the staffing bounds a day fell on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingDirection {
    /// Fewer shifts than `min_staff`
    Understaffed,
    /// More shifts than `max_staff`
    Overstaffed,
}

impl StaffingDirection {
    /// Short form used in alert ids
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffingDirection::Understaffed => "under",
            StaffingDirection::Overstaffed => "over",
        }
    }

    /// Understaffing blocks service, overstaffing only costs money
    pub fn severity(&self) -> Severity {
        match self {
            StaffingDirection::Understaffed => Severity::Error,
            StaffingDirection::Overstaffed => Severity::Warning,
        }
    }
}

/// Variant-specific payload of an alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AlertKind {
    /// Same employee booked on two intersecting shifts
    Overlap {
        /// The pair, in scan order
        shifts: [Shift; 2],
    },
    /// Headcount for a position on a day is outside its bounds
    Staffing {
        date: NaiveDate,
        position: String,
        /// Number of shifts of `position` that day
        scheduled: u32,
        direction: StaffingDirection,
        min_staff: u32,
        max_staff: u32,
    },
    /// Long shift without a documented break
    Break {
        shift: Shift,
        /// Shift length in fractional hours
        hours: f64,
    },
}

/// A detected scheduling conflict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictAlert {
    id: AlertId,
    severity: Severity,
    message: String,
    #[serde(flatten)]
    kind: AlertKind,
}

impl ConflictAlert {
    /// Creates an error-severity overlap alert for two shifts
    pub fn overlap(a: Shift, b: Shift, message: impl Into<String>) -> Self {
        Self {
            id: AlertId::overlap(&a.id, &b.id),
            severity: Severity::Error,
            message: message.into(),
            kind: AlertKind::Overlap { shifts: [a, b] },
        }
    }

    /// Creates a staffing alert; severity follows the direction
    pub fn staffing(
        date: NaiveDate,
        position: impl Into<String>,
        scheduled: u32,
        direction: StaffingDirection,
        min_staff: u32,
        max_staff: u32,
        message: impl Into<String>,
    ) -> Self {
        let position = position.into();
        Self {
            id: AlertId::staffing(date, &position, direction),
            severity: direction.severity(),
            message: message.into(),
            kind: AlertKind::Staffing {
                date,
                position,
                scheduled,
                direction,
                min_staff,
                max_staff,
            },
        }
    }

    /// Creates a warning-severity missing-break alert for one shift
    pub fn break_time(shift: Shift, hours: f64, message: impl Into<String>) -> Self {
        Self {
            id: AlertId::break_time(&shift.id),
            severity: Severity::Warning,
            message: message.into(),
            kind: AlertKind::Break { shift, hours },
        }
    }

    /// Returns the deterministic alert id
    pub fn id(&self) -> &AlertId {
        &self.id
    }

    /// Returns the alert severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the human-readable description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the variant payload
    pub fn kind(&self) -> &AlertKind {
        &self.kind
    }

    /// Returns the alert's discriminant
    pub fn alert_type(&self) -> AlertType {
        match self.kind {
            AlertKind::Overlap { .. } => AlertType::Overlap,
            AlertKind::Staffing { .. } => AlertType::Staffing,
            AlertKind::Break { .. } => AlertType::Break,
        }
    }

    /// Shifts implicated in this alert; empty for staffing alerts
    pub fn shifts(&self) -> &[Shift] {
        match &self.kind {
            AlertKind::Overlap { shifts } => shifts.as_slice(),
            AlertKind::Staffing { .. } => &[],
            AlertKind::Break { shift, .. } => std::slice::from_ref(shift),
        }
    }
}
