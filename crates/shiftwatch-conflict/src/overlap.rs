//! Double-booking detection
//!
//! Flags pairs of shifts assigned to the same employee whose windows
//! intersect. Employees are correlated by exact name equality.

use shiftwatch_core::domain::{ConflictAlert, Shift};
use tracing::{debug, trace};

/// Finds every pair of same-employee shifts that overlap
///
/// Each unordered pair is visited once (`j > i`), so no deduplication pass
/// is needed. Output order follows the scan order.
pub fn detect_overlapping_shifts(shifts: &[Shift]) -> Vec<ConflictAlert> {
    let mut alerts = Vec::new();

    for (i, a) in shifts.iter().enumerate() {
        for b in &shifts[i + 1..] {
            if a.employee_name != b.employee_name || !windows_overlap(a, b) {
                continue;
            }

            trace!(
                employee = %a.employee_name,
                first = %a.id,
                second = %b.id,
                "Overlapping shifts"
            );
            let message = format!(
                "{} is double-booked: {} and {}",
                a.employee_name,
                describe_window(a),
                describe_window(b)
            );
            alerts.push(ConflictAlert::overlap(a.clone(), b.clone(), message));
        }
    }

    debug!(
        shifts = shifts.len(),
        overlaps = alerts.len(),
        "Overlap scan complete"
    );
    alerts
}

/// Three-clause intersection test
///
/// Overlap when `a.start` or `a.end` lies strictly inside `b`, or `a`
/// strictly contains `b`. Identical windows, and `a` containing `b` with a
/// shared start, do not match.
fn windows_overlap(a: &Shift, b: &Shift) -> bool {
    let start_inside = a.start > b.start && a.start < b.end;
    let end_inside = a.end > b.start && a.end < b.end;
    let contains = a.start < b.start && a.end > b.end;
    start_inside || end_inside || contains
}

fn describe_window(shift: &Shift) -> String {
    format!(
        "{} {}-{}",
        shift.start.format("%Y-%m-%d"),
        shift.start.format("%H:%M"),
        shift.end.format("%H:%M")
    )
}
