//! Staffing level checks
//!
//! Counts shifts per position per calendar day and compares each count with
//! the configured minimum and maximum. Every day that has at least one
//! shift is checked against every requirement, so a position with no shifts
//! at all on a busy day is reported as understaffed.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shiftwatch_core::domain::{ConflictAlert, Shift, StaffingDirection, StaffingRequirement};
use tracing::{debug, trace};

/// Reports understaffed and overstaffed positions for each scheduled day
///
/// Days are visited in ascending order and requirements in table order, so
/// the output is stable for a given input.
pub fn detect_staffing_issues(
    shifts: &[Shift],
    requirements: &[StaffingRequirement],
) -> Vec<ConflictAlert> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&Shift>> = BTreeMap::new();
    for shift in shifts {
        by_date.entry(shift.date()).or_default().push(shift);
    }

    let mut alerts = Vec::new();

    for (date, day_shifts) in &by_date {
        for req in requirements {
            let scheduled = day_shifts
                .iter()
                .filter(|s| s.position == req.position)
                .count() as u32;

            let direction = if scheduled < req.min_staff {
                StaffingDirection::Understaffed
            } else if scheduled > req.max_staff {
                StaffingDirection::Overstaffed
            } else {
                continue;
            };

            trace!(
                date = %date,
                position = %req.position,
                scheduled,
                direction = direction.as_str(),
                "Staffing out of bounds"
            );
            alerts.push(ConflictAlert::staffing(
                *date,
                req.position.clone(),
                scheduled,
                direction,
                req.min_staff,
                req.max_staff,
                staffing_message(*date, req, scheduled, direction),
            ));
        }
    }

    debug!(
        days = by_date.len(),
        requirements = requirements.len(),
        issues = alerts.len(),
        "Staffing check complete"
    );
    alerts
}

fn staffing_message(
    date: NaiveDate,
    req: &StaffingRequirement,
    scheduled: u32,
    direction: StaffingDirection,
) -> String {
    let day = date.format("%Y-%m-%d");
    match direction {
        StaffingDirection::Understaffed => format!(
            "Understaffed: {} on {day} has {scheduled} scheduled (minimum {})",
            req.position, req.min_staff
        ),
        StaffingDirection::Overstaffed => format!(
            "Overstaffed: {} on {day} has {scheduled} scheduled (maximum {})",
            req.position, req.max_staff
        ),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use shiftwatch_core::domain::{AlertKind, AlertType, Severity};

    use super::*;

    fn shift(id: i64, position: &str, day: u32) -> Shift {
        Shift::new(
            id,
            format!("Employee {id}"),
            position,
            Utc.with_ymd_and_hms(2024, 3, day, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, day, 14, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_missing_position_is_understaffed() {
        let shifts = vec![shift(1, "Server", 20)];
        let reqs = vec![StaffingRequirement::new("Chef", 1, 2)];

        let alerts = detect_staffing_issues(&shifts, &reqs);

        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.alert_type(), AlertType::Staffing);
        assert_eq!(alert.severity(), Severity::Error);
        assert!(alert.shifts().is_empty());
        assert_eq!(alert.id().as_str(), "staffing-2024-03-20-Chef-under");
        assert_eq!(
            alert.message(),
            "Understaffed: Chef on 2024-03-20 has 0 scheduled (minimum 1)"
        );
    }

    #[test]
    fn test_overstaffed_counts_every_shift() {
        let shifts: Vec<Shift> = (1..=5).map(|id| shift(id, "Server", 20)).collect();
        let reqs = vec![StaffingRequirement::new("Server", 2, 4)];

        let alerts = detect_staffing_issues(&shifts, &reqs);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity(), Severity::Warning);
        match alerts[0].kind() {
            AlertKind::Staffing {
                scheduled,
                direction,
                ..
            } => {
                assert_eq!(*scheduled, 5);
                assert_eq!(*direction, StaffingDirection::Overstaffed);
            }
            other => panic!("expected staffing alert, got {other:?}"),
        }
    }

    #[test]
    fn test_within_bounds_is_silent() {
        let shifts = vec![shift(1, "Chef", 20), shift(2, "Chef", 20)];
        let reqs = vec![StaffingRequirement::new("Chef", 1, 2)];
        assert!(detect_staffing_issues(&shifts, &reqs).is_empty());
    }

    #[test]
    fn test_every_day_checked_against_every_requirement() {
        let shifts = vec![shift(1, "Chef", 21), shift(2, "Server", 20)];
        let reqs = vec![
            StaffingRequirement::new("Chef", 1, 2),
            StaffingRequirement::new("Bartender", 1, 2),
        ];

        let ids: Vec<String> = detect_staffing_issues(&shifts, &reqs)
            .iter()
            .map(|a| a.id().to_string())
            .collect();

        assert_eq!(
            ids,
            [
                "staffing-2024-03-20-Chef-under",
                "staffing-2024-03-20-Bartender-under",
                "staffing-2024-03-21-Bartender-under",
            ]
        );
    }

    #[test]
    fn test_position_match_is_case_sensitive() {
        let shifts = vec![shift(1, "chef", 20)];
        let reqs = vec![StaffingRequirement::new("Chef", 1, 2)];
        assert_eq!(detect_staffing_issues(&shifts, &reqs).len(), 1);
    }

    #[test]
    fn test_unknown_positions_are_ignored() {
        let shifts = vec![shift(1, "Sommelier", 20), shift(2, "Chef", 20)];
        let reqs = vec![StaffingRequirement::new("Chef", 1, 2)];
        assert!(detect_staffing_issues(&shifts, &reqs).is_empty());
    }

    #[test]
    fn test_no_shifts_means_no_days_to_check() {
        let reqs = vec![StaffingRequirement::new("Chef", 1, 2)];
        assert!(detect_staffing_issues(&[], &reqs).is_empty());
    }

    #[test]
    fn test_empty_requirements_table() {
        let shifts = vec![shift(1, "Chef", 20)];
        assert!(detect_staffing_issues(&shifts, &[]).is_empty());
    }
}
