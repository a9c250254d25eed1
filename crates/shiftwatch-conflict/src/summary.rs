//! Alert grouping for display
//!
//! The scheduling screen lists overlap and break alerts one by one but
//! folds all staffing alerts behind a single count with a drill-in list.

use serde::Serialize;
use shiftwatch_core::domain::{AlertType, ConflictAlert, Severity};

/// Staffing alerts collapsed into one entry
#[derive(Debug, Clone, Default, Serialize)]
pub struct StaffingGroup {
    pub count: usize,
    pub alerts: Vec<ConflictAlert>,
}

/// Alerts grouped by type, with per-severity totals
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub overlaps: Vec<ConflictAlert>,
    pub breaks: Vec<ConflictAlert>,
    pub staffing: StaffingGroup,
}

impl AlertSummary {
    /// Groups `alerts`, keeping detector order within each group
    pub fn from_alerts(alerts: &[ConflictAlert]) -> Self {
        let mut summary = Self {
            total: alerts.len(),
            ..Self::default()
        };

        for alert in alerts {
            match alert.severity() {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
            }
            match alert.alert_type() {
                AlertType::Overlap => summary.overlaps.push(alert.clone()),
                AlertType::Break => summary.breaks.push(alert.clone()),
                AlertType::Staffing => summary.staffing.alerts.push(alert.clone()),
            }
        }
        summary.staffing.count = summary.staffing.alerts.len();
        summary
    }

    /// True when at least one error-severity alert is present
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// True when there is nothing to report
    pub fn is_clear(&self) -> bool {
        self.total == 0
    }

    /// Number of alerts of the given type
    pub fn count(&self, alert_type: AlertType) -> usize {
        match alert_type {
            AlertType::Overlap => self.overlaps.len(),
            AlertType::Break => self.breaks.len(),
            AlertType::Staffing => self.staffing.count,
        }
    }
}
