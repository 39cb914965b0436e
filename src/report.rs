//! Plain-text schedule report.
//!
//! Formats the outcome of a sequencing run for a log pane or terminal:
//!
//! ```text
//! Job Sequencing Result:
//! B -> D -> C -> E -> A
//! Total Elapsed Time: 30 hours
//! Idle Time on Machine 1: 0 hours
//! Idle Time on Machine 2: 3 hours
//! ```

use std::fmt;

use crate::models::{Duration, Job, Timeline};

const DEFAULT_UNIT: &str = "hours";

/// Text report over a built timeline.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Job;
/// use u_flowshop::report::ScheduleReport;
/// use u_flowshop::timeline::build_timeline;
///
/// let timeline = build_timeline(&[Job::new("B", 1_i64, 6), Job::new("A", 5, 2)]);
/// let text = ScheduleReport::new(&timeline).with_unit("min").to_string();
/// assert!(text.contains("B -> A"));
/// assert!(text.contains("Total Elapsed Time: 9 min"));
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleReport<'a, T = i64> {
    timeline: &'a Timeline<T>,
    unit: String,
}

impl<'a, T: Duration> ScheduleReport<'a, T> {
    /// Creates a report in hours.
    pub fn new(timeline: &'a Timeline<T>) -> Self {
        Self {
            timeline,
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    /// Sets the time unit label.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sequence line (`B -> D -> C`). Empty for an empty timeline.
    pub fn sequence_line(&self) -> String {
        self.timeline.job_names().join(" -> ")
    }
}

impl<T: Duration> fmt::Display for ScheduleReport<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.timeline.summary;
        let unit = &self.unit;
        writeln!(f, "Job Sequencing Result:")?;
        writeln!(f, "{}", self.sequence_line())?;
        writeln!(f, "Total Elapsed Time: {} {unit}", summary.total_elapsed_time)?;
        writeln!(f, "Idle Time on Machine 1: {} {unit}", summary.idle_time_machine1)?;
        write!(f, "Idle Time on Machine 2: {} {unit}", summary.idle_time_machine2)
    }
}

/// Confirmation line for a newly submitted job.
///
/// `Added Job: A (M1: 5 hours, M2: 2 hours)`
pub fn added_job_line<T: Duration>(job: &Job<T>, unit: &str) -> String {
    format!(
        "Added Job: {} (M1: {} {unit}, M2: {} {unit})",
        job.name, job.duration_m1, job.duration_m2
    )
}
