//! Domain newtypes
//!
//! Strongly-typed wrappers for shift and alert identifiers. Shift ids are
//! assigned by the caller and may arrive as integers or strings; alert ids
//! are derived purely from the data that produced the alert.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{alert::StaffingDirection, errors::DomainError};

// ============================================================================
// ShiftId
// ============================================================================

/// Caller-assigned identifier of a shift
///
/// The backend hands out numeric ids, while shifts drafted locally use
/// string ids. Both forms round-trip through serde unchanged.
///
/// # Example
///
/// ```
/// use shiftwatch_core::domain::ShiftId;
///
/// let numeric: ShiftId = "42".parse().unwrap();
/// assert_eq!(numeric, ShiftId::from(42));
///
/// let text: ShiftId = "draft-a".parse().unwrap();
/// assert_eq!(text.to_string(), "draft-a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShiftId {
    /// Numeric id as stored by the backend
    Number(i64),
    /// Free-form string id
    Text(String),
}

impl ShiftId {
    /// Generate a fresh random string id for a shift created locally
    #[must_use]
    pub fn generate() -> Self {
        Self::Text(Uuid::new_v4().to_string())
    }
}

impl Display for ShiftId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ShiftId::Number(n) => write!(f, "{n}"),
            ShiftId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for ShiftId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidId("shift id cannot be empty".to_string()));
        }
        Ok(trimmed
            .parse::<i64>()
            .map(ShiftId::Number)
            .unwrap_or_else(|_| ShiftId::Text(trimmed.to_string())))
    }
}

impl From<i64> for ShiftId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ShiftId {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<&str> for ShiftId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ShiftId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// ============================================================================
// AlertId
// ============================================================================

/// Deterministic identifier of a conflict alert
///
/// Re-running detection over unchanged shifts yields the same ids, which the
/// UI relies on to key alerts across re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    /// Id of an overlap between two shifts, independent of argument order
    #[must_use]
    pub fn overlap(a: &ShiftId, b: &ShiftId) -> Self {
        let (a, b) = (a.to_string(), b.to_string());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Self(format!("overlap-{lo}-{hi}"))
    }

    /// Id of a staffing violation for one position on one day
    #[must_use]
    pub fn staffing(date: NaiveDate, position: &str, direction: StaffingDirection) -> Self {
        Self(format!(
            "staffing-{}-{position}-{}",
            date.format("%Y-%m-%d"),
            direction.as_str()
        ))
    }

    /// Id of a missing-break violation on a single shift
    #[must_use]
    pub fn break_time(shift: &ShiftId) -> Self {
        Self(format!("break-{shift}"))
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for AlertId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
