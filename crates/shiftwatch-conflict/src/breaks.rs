//! Missing-break detection
//!
//! A shift longer than the policy threshold must document a break in its
//! notes. Any occurrence of the keyword counts, whatever the context.

use shiftwatch_core::domain::{BreakPolicy, ConflictAlert, Shift};
use tracing::{debug, trace, warn};

/// Flags long shifts without a break, using the default policy
///
/// Default policy: more than 6 hours without "break" in the notes.
pub fn detect_break_time_violations(shifts: &[Shift]) -> Vec<ConflictAlert> {
    detect_break_time_violations_with(shifts, &BreakPolicy::default())
}

/// Flags long shifts without a break under `policy`
pub fn detect_break_time_violations_with(
    shifts: &[Shift],
    policy: &BreakPolicy,
) -> Vec<ConflictAlert> {
    let mut alerts = Vec::new();

    for shift in shifts {
        let hours = shift.duration_hours();
        if hours < 0.0 {
            warn!(shift = %shift.id, hours, "Shift ends before it starts");
        }
        if hours <= policy.max_hours_without_break || shift.mentions(&policy.note_keyword) {
            continue;
        }

        trace!(shift = %shift.id, hours, "Long shift without a break");
        let message = format!(
            "{} is scheduled for {hours:.1}hr without a break ({} minute break required for shifts over {} hours)",
            shift.employee_name, policy.required_break_minutes, policy.max_hours_without_break
        );
        alerts.push(ConflictAlert::break_time(shift.clone(), hours, message));
    }

    debug!(
        shifts = shifts.len(),
        violations = alerts.len(),
        "Break check complete"
    );
    alerts
}
