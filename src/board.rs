//! Growing job list with snapshot-and-process.
//!
//! Models the caller side of the sequencer: jobs are submitted one at a
//! time, and each processing request works on a copy of the list taken at
//! that moment. Nothing is persisted between runs.

use std::str::FromStr;

use tracing::info;

use crate::models::{Duration, Job, Timeline};
use crate::report::ScheduleReport;
use crate::sequencing::JohnsonSequencer;
use crate::timeline::build_timeline;
use crate::validation::{check_append, parse_job, ValidationError};

/// Result of one processing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome<T = i64> {
    /// Jobs in processing order.
    pub sequence: Vec<Job<T>>,
    /// Timing of that order on both machines.
    pub timeline: Timeline<T>,
}

impl<T: Duration> ProcessOutcome<T> {
    /// Text report of this outcome (unit: hours).
    pub fn report(&self) -> ScheduleReport<'_, T> {
        ScheduleReport::new(&self.timeline)
    }
}

/// Ordered, append-only collection of submitted jobs.
///
/// # Example
///
/// ```
/// use u_flowshop::board::JobBoard;
/// use u_flowshop::sequencing::JohnsonSequencer;
///
/// let mut board: JobBoard = JobBoard::new();
/// board.add_parsed("A", "5", "2").unwrap();
/// board.add_parsed("B", "1", "6").unwrap();
/// assert!(board.add_parsed("C", "x", "1").is_err());
///
/// let outcome = board.process(&JohnsonSequencer::new());
/// assert_eq!(outcome.timeline.job_names(), vec!["B", "A"]);
/// assert_eq!(outcome.timeline.makespan(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JobBoard<T = i64> {
    jobs: Vec<Job<T>>,
}

impl<T: Duration> JobBoard<T> {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Appends a job and returns a reference to it.
    pub fn add(&mut self, job: Job<T>) -> &Job<T> {
        info!(
            job = %job.name,
            m1 = %job.duration_m1,
            m2 = %job.duration_m2,
            "job added"
        );
        let idx = self.jobs.len();
        self.jobs.push(job);
        &self.jobs[idx]
    }

    /// Parses raw text fields and appends the job.
    ///
    /// Nothing is appended when parsing fails or when the job would push
    /// the board's total processing time out of the time unit's range.
    pub fn add_parsed(
        &mut self,
        name: &str,
        duration_m1: &str,
        duration_m2: &str,
    ) -> Result<&Job<T>, ValidationError>
    where
        T: FromStr,
    {
        let job = parse_job(name, duration_m1, duration_m2)?;
        check_append(&self.jobs, &job)?;
        Ok(self.add(job))
    }

    /// Submitted jobs, in submission order.
    pub fn jobs(&self) -> &[Job<T>] {
        &self.jobs
    }

    /// Number of submitted jobs.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no job has been submitted.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Removes all jobs.
    pub fn clear(&mut self) {
        self.jobs.clear();
    }

    /// Independent copy of the current list.
    pub fn snapshot(&self) -> Vec<Job<T>> {
        self.jobs.clone()
    }

    /// Sequences a snapshot of the list and builds its timeline.
    pub fn process(&self, sequencer: &JohnsonSequencer) -> ProcessOutcome<T> {
        let snapshot = self.snapshot();
        let sequence = sequencer.sequence(&snapshot);
        let timeline = build_timeline(&sequence);
        info!(
            jobs = sequence.len(),
            makespan = %timeline.summary.total_elapsed_time,
            idle_m2 = %timeline.summary.idle_time_machine2,
            "jobs processed"
        );
        ProcessOutcome { sequence, timeline }
    }
}
