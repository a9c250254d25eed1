//! Check command - Detect conflicts in a shift export
//!
//! Provides the `shiftwatch check <FILE>` CLI command which:
//! 1. Loads shifts from a JSON or YAML file
//! 2. Warns about shifts the scheduling form would have rejected
//! 3. Runs overlap, staffing and break detection with the configured rules
//! 4. Prints overlap and break alerts individually and staffing alerts as a group

use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context as _, Result};
use shiftwatch_conflict::{ConflictDetector, ReviewScheduleUseCase, ScheduleReview};
use shiftwatch_core::{
    domain::Shift,
    ports::{IShiftSource, InMemoryShiftSource},
};
use tracing::info;

use crate::{
    output::{alert_line, get_formatter, OutputFormat, OutputFormatter},
    source::FileShiftSource,
    Context,
};

/// Arguments for the check subcommand
#[derive(Debug, clap::Args)]
pub struct CheckCommand {
    /// Shift file (JSON array, or YAML list for .yaml/.yml)
    pub file: PathBuf,

    /// List every staffing issue instead of only their count
    #[arg(long)]
    pub details: bool,

    /// Exit with an error if any error-severity conflict is found
    #[arg(long)]
    pub fail_on_error: bool,
}

impl CheckCommand {
    /// Execute the check command
    pub async fn execute(&self, ctx: &Context) -> Result<()> {
        let formatter = get_formatter(ctx.format);

        let shifts = FileShiftSource::new(&self.file)
            .load_shifts()
            .await
            .context("Failed to load shifts")?;

        info!(file = %self.file.display(), shifts = shifts.len(), "Checking schedule");

        for warning in validation_warnings(&shifts) {
            formatter.warn(&warning);
        }

        let detector = ConflictDetector::from_config(&ctx.config);
        let source: Arc<dyn IShiftSource> = Arc::new(InMemoryShiftSource::new(shifts));
        let review = ReviewScheduleUseCase::new(source, detector)
            .review()
            .await
            .context("Failed to review schedule")?;

        match ctx.format {
            OutputFormat::Json => {
                let json = serde_json::to_value(&review)
                    .context("Failed to serialize review to JSON")?;
                formatter.print_json(&json);
            }
            OutputFormat::Human => self.print_human(&review, &*formatter),
        }

        if self.fail_on_error && review.summary.has_errors() {
            bail!(
                "schedule has {} error-severity conflict{}",
                review.summary.errors,
                plural(review.summary.errors)
            );
        }

        Ok(())
    }

    fn print_human(&self, review: &ScheduleReview, formatter: &dyn OutputFormatter) {
        let summary = &review.summary;

        if summary.is_clear() {
            formatter.success(&format!(
                "No conflicts in {} shift{}",
                review.shift_count,
                plural(review.shift_count)
            ));
            return;
        }

        formatter.success(&format!(
            "{} conflict{} in {} shift{} ({} error{}, {} warning{})",
            summary.total,
            plural(summary.total),
            review.shift_count,
            plural(review.shift_count),
            summary.errors,
            plural(summary.errors),
            summary.warnings,
            plural(summary.warnings),
        ));

        if !summary.overlaps.is_empty() {
            formatter.info("");
            formatter.info("Double bookings:");
            for alert in &summary.overlaps {
                formatter.info(&alert_line(alert));
            }
        }

        if !summary.breaks.is_empty() {
            formatter.info("");
            formatter.info("Missing breaks:");
            for alert in &summary.breaks {
                formatter.info(&alert_line(alert));
            }
        }

        if summary.staffing.count > 0 {
            formatter.info("");
            formatter.info(&format!(
                "Staffing issues: {}",
                summary.staffing.count
            ));
            if self.details {
                for alert in &summary.staffing.alerts {
                    formatter.info(&alert_line(alert));
                }
            } else {
                formatter.info("Use '--details' to list staffing issues.");
            }
        }
    }
}

/// Describes every shift that fails caller-side validation
///
/// These shifts are still analysed; the engine tolerates them.
fn validation_warnings(shifts: &[Shift]) -> Vec<String> {
    shifts
        .iter()
        .filter_map(|shift| shift.validate().err())
        .map(|e| e.to_string())
        .collect()
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}
