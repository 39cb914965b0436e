//! Two-machine simulation.
//!
//! # Algorithm
//!
//! Two clocks start at zero. For each job in order:
//! 1. Machine 1 runs it from its clock and advances by `d1`.
//! 2. Machine 2 starts at `max(m2 clock, m1 end)`; the gap when Machine 1
//!    finishes later is counted as Machine 2 idle time.
//! 3. Machine 2 advances to `start + d2`.
//!
//! # Complexity
//! O(n) time and space.

use tracing::debug;

use crate::models::{Duration, Job, ScheduleSummary, Timeline, TimingRecord};

/// Builds the timeline for jobs processed in the given order.
///
/// An empty sequence yields no records and an all-zero summary.
///
/// # Accepted range
/// Every clock stays at or below the sum of all durations on both
/// machines. Integer units overflow (and panic in debug builds) when that
/// sum does not fit `T`; [`crate::validation::validate_jobs`] and
/// [`crate::validation::total_horizon`] reject such lists up front.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Job;
/// use u_flowshop::timeline::build_timeline;
///
/// let timeline = build_timeline(&[Job::new("J", 4_i64, 3)]);
/// let r = &timeline.records[0];
/// assert_eq!((r.machine1_start, r.machine1_end), (0, 4));
/// assert_eq!((r.machine2_start, r.machine2_end), (4, 7));
/// assert_eq!(timeline.summary.idle_time_machine2, 4);
/// ```
pub fn build_timeline<T: Duration>(sequence: &[Job<T>]) -> Timeline<T> {
    let mut m1_time = T::zero();
    let mut m2_time = T::zero();
    let mut idle_m2 = T::zero();
    let mut records = Vec::with_capacity(sequence.len());

    for (position, job) in sequence.iter().enumerate() {
        let machine1_start = m1_time;
        let machine1_end = machine1_start + job.duration_m1;
        m1_time = machine1_end;

        // Machine 2 waits only when Machine 1 releases the job late.
        let idle_before_m2 = if machine1_end > m2_time {
            machine1_end - m2_time
        } else {
            T::zero()
        };
        idle_m2 = idle_m2 + idle_before_m2;

        let machine2_start = m2_time.max_of(machine1_end);
        let machine2_end = machine2_start + job.duration_m2;
        m2_time = machine2_end;

        records.push(TimingRecord {
            position,
            job: job.clone(),
            machine1_start,
            machine1_end,
            machine2_start,
            machine2_end,
            idle_before_m2,
        });
    }

    // Equals m2_time for non-negative durations; kept as an explicit max.
    let summary = ScheduleSummary {
        total_elapsed_time: m1_time.max_of(m2_time),
        idle_time_machine1: T::zero(),
        idle_time_machine2: idle_m2,
    };

    debug!(jobs = records.len(), ?summary, "timeline built");

    Timeline { records, summary }
}
