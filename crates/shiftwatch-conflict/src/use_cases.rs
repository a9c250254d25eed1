//! Schedule review use case
//!
//! Loads a fresh snapshot from the shift source and runs full detection on
//! it. The scheduling screen calls this on first load and after every add,
//! edit or delete.

use std::sync::Arc;

use serde::Serialize;
use shiftwatch_core::{domain::ConflictAlert, ports::IShiftSource};
use tracing::{debug, info};

use crate::{detector::ConflictDetector, error::ConflictError, summary::AlertSummary};

/// Result of one review pass
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReview {
    /// Number of shifts in the snapshot
    pub shift_count: usize,
    /// Alerts in detector order
    pub alerts: Vec<ConflictAlert>,
    /// The same alerts grouped for display
    pub summary: AlertSummary,
}

/// Orchestrates snapshot loading + conflict detection
pub struct ReviewScheduleUseCase {
    source: Arc<dyn IShiftSource>,
    detector: ConflictDetector,
}

impl ReviewScheduleUseCase {
    pub fn new(source: Arc<dyn IShiftSource>, detector: ConflictDetector) -> Self {
        Self { source, detector }
    }

    /// Reviews the current schedule from scratch
    pub async fn review(&self) -> Result<ScheduleReview, ConflictError> {
        let shifts = self.source.load_shifts().await.map_err(ConflictError::Source)?;
        debug!(shifts = shifts.len(), "Loaded shift snapshot");

        let alerts = self.detector.detect_all_conflicts(&shifts);
        let summary = AlertSummary::from_alerts(&alerts);

        info!(
            shifts = shifts.len(),
            errors = summary.errors,
            warnings = summary.warnings,
            "Schedule reviewed"
        );

        Ok(ScheduleReview {
            shift_count: shifts.len(),
            alerts,
            summary,
        })
    }
}
