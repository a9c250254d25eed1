//! ShiftWatch Conflict - Schedule conflict detection
//!
//! Provides:
//! - Double-booking detection for the same employee
//! - Per-day staffing level checks against an injected requirements table
//! - Missing-break detection on long shifts
//! - Alert grouping for display and a review use case over an `IShiftSource`

pub mod breaks;
pub mod detector;
pub mod error;
pub mod overlap;
pub mod staffing;
pub mod summary;
pub mod use_cases;

pub use breaks::{detect_break_time_violations, detect_break_time_violations_with};
pub use detector::{detect_all_conflicts, ConflictDetector};
pub use error::ConflictError;
pub use overlap::detect_overlapping_shifts;
pub use staffing::detect_staffing_issues;
pub use summary::AlertSummary;
pub use use_cases::{ReviewScheduleUseCase, ScheduleReview};
