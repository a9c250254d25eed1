//! Conflict detection orchestrator
//!
//! Runs the overlap, staffing and break detectors over one snapshot of
//! shifts and concatenates their results in that fixed order. Nothing is
//! cached between calls; callers re-run detection after every change to
//! the shift collection.

use std::collections::HashSet;

use shiftwatch_core::{
    config::Config,
    domain::{BreakPolicy, ConflictAlert, Shift, StaffingRequirement},
};
use tracing::info;

use crate::{
    breaks::detect_break_time_violations_with, error::ConflictError,
    overlap::detect_overlapping_shifts, staffing::detect_staffing_issues,
};

/// Detects scheduling conflicts against an injected staffing table
///
/// Holds no mutable state, so a single detector can be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct ConflictDetector {
    requirements: Vec<StaffingRequirement>,
    break_policy: BreakPolicy,
}

impl ConflictDetector {
    /// Creates a detector with the given staffing table and default break policy
    ///
    /// The table is used as-is; see [`ConflictDetector::try_new`] for a
    /// validating constructor.
    pub fn new(requirements: Vec<StaffingRequirement>) -> Self {
        Self {
            requirements,
            break_policy: BreakPolicy::default(),
        }
    }

    /// Creates a detector after checking every requirement and rejecting
    /// duplicate positions
    pub fn try_new(requirements: Vec<StaffingRequirement>) -> Result<Self, ConflictError> {
        let mut seen = HashSet::new();
        for req in &requirements {
            req.validate()?;
            if !seen.insert(req.position.as_str()) {
                return Err(ConflictError::DuplicatePosition(req.position.clone()));
            }
        }
        Ok(Self::new(requirements))
    }

    /// Creates a detector from the staffing and break sections of `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.requirements().to_vec()).with_break_policy(config.break_policy())
    }

    /// Replaces the break policy
    pub fn with_break_policy(mut self, policy: BreakPolicy) -> Self {
        self.break_policy = policy;
        self
    }

    /// Returns the staffing table
    pub fn requirements(&self) -> &[StaffingRequirement] {
        &self.requirements
    }

    /// Returns the break policy
    pub fn break_policy(&self) -> &BreakPolicy {
        &self.break_policy
    }

    /// Runs all detectors: overlaps, then staffing, then breaks
    ///
    /// A shift may appear in several alerts of different types.
    pub fn detect_all_conflicts(&self, shifts: &[Shift]) -> Vec<ConflictAlert> {
        let mut alerts = detect_overlapping_shifts(shifts);
        alerts.extend(detect_staffing_issues(shifts, &self.requirements));
        alerts.extend(detect_break_time_violations_with(shifts, &self.break_policy));

        info!(
            shifts = shifts.len(),
            alerts = alerts.len(),
            "Conflict detection complete"
        );
        alerts
    }
}

impl Default for ConflictDetector {
    fn default() -> Self {
        Self::new(shiftwatch_core::domain::default_requirements())
    }
}

/// Runs all detectors with `requirements` and the default break policy
pub fn detect_all_conflicts(
    shifts: &[Shift],
    requirements: &[StaffingRequirement],
) -> Vec<ConflictAlert> {
    ConflictDetector::new(requirements.to_vec()).detect_all_conflicts(shifts)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use shiftwatch_core::domain::{AlertType, DomainError};

    use super::*;

    fn shift(id: i64, name: &str, position: &str, start: u32, end: u32) -> Shift {
        Shift::new(
            id,
            name,
            position,
            Utc.with_ymd_and_hms(2024, 3, 20, start, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 20, end, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_order_is_overlap_then_staffing_then_break() {
        let shifts = vec![
            shift(1, "Ana", "Chef", 9, 17),
            shift(2, "Ana", "Chef", 12, 14),
        ];
        let detector = ConflictDetector::new(vec![StaffingRequirement::new("Host", 1, 1)]);

        let types: Vec<AlertType> = detector
            .detect_all_conflicts(&shifts)
            .iter()
            .map(|a| a.alert_type())
            .collect();

        assert_eq!(
            types,
            [AlertType::Overlap, AlertType::Staffing, AlertType::Break]
        );
    }

    #[test]
    fn test_same_shift_in_several_alerts() {
        let shifts = vec![
            shift(1, "Ana", "Chef", 9, 17),
            shift(2, "Ana", "Chef", 16, 20),
        ];
        let alerts = detect_all_conflicts(&shifts, &[]);
        let mentioning_first = alerts
            .iter()
            .filter(|a| a.shifts().iter().any(|s| s.id == shifts[0].id))
            .count();
        assert_eq!(mentioning_first, 2);
    }

    #[test]
    fn test_empty_input_yields_no_alerts() {
        assert!(ConflictDetector::default().detect_all_conflicts(&[]).is_empty());
    }

    #[test]
    fn test_try_new_rejects_bad_tables() {
        let err = ConflictDetector::try_new(vec![StaffingRequirement::new("Chef", 2, 1)])
            .unwrap_err();
        assert!(matches!(
            err,
            ConflictError::InvalidRequirement(DomainError::InvalidRequirement { .. })
        ));

        let err = ConflictDetector::try_new(vec![
            StaffingRequirement::new("Chef", 1, 2),
            StaffingRequirement::new("Chef", 1, 3),
        ])
        .unwrap_err();
        assert!(matches!(err, ConflictError::DuplicatePosition(p) if p == "Chef"));

        assert!(ConflictDetector::try_new(shiftwatch_core::domain::default_requirements()).is_ok());
    }

    #[test]
    fn test_from_config_uses_break_policy() {
        let config = shiftwatch_core::config::ConfigBuilder::new()
            .requirements(vec![])
            .max_hours_without_break(3.0)
            .build();
        let detector = ConflictDetector::from_config(&config);

        let alerts = detector.detect_all_conflicts(&[shift(1, "Ana", "Chef", 9, 13)]);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].alert_type(), AlertType::Break);
        assert_eq!(detector.break_policy().max_hours_without_break, 3.0);
    }

    #[test]
    fn test_detector_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConflictDetector>();
    }
}
