//! Timeline quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Completion of the last job on Machine 2 |
//! | Busy time | Sum of processing times per machine |
//! | Utilization | Busy time / makespan, per machine |
//! | Lower bound | max(Σd1 + min d2, Σd2 + min d1) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::models::{Duration, Job, Machine, Timeline};

/// Timeline performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineKpi<T = i64> {
    /// Makespan: latest completion time on Machine 2.
    pub makespan: T,
    /// Total processing time on Machine 1.
    pub busy_machine1: T,
    /// Total processing time on Machine 2.
    pub busy_machine2: T,
    /// Machine 2 idle time before the makespan.
    pub idle_machine2: T,
    /// Machine 1 busy fraction of the makespan (0.0..1.0).
    pub utilization_machine1: f64,
    /// Machine 2 busy fraction of the makespan (0.0..1.0).
    pub utilization_machine2: f64,
    /// No ordering of these jobs can finish earlier than this.
    pub lower_bound: T,
}

impl<T: Duration> TimelineKpi<T> {
    /// Computes KPIs from a built timeline.
    pub fn calculate(timeline: &Timeline<T>) -> Self {
        let makespan = timeline.makespan();
        let busy_machine1 = timeline.busy_time(Machine::First);
        let busy_machine2 = timeline.busy_time(Machine::Second);
        let horizon = makespan.to_f64();

        let utilization = |busy: T| {
            if horizon > 0.0 {
                busy.to_f64() / horizon
            } else {
                0.0
            }
        };

        Self {
            makespan,
            busy_machine1,
            busy_machine2,
            idle_machine2: timeline.summary.idle_time_machine2,
            utilization_machine1: utilization(busy_machine1),
            utilization_machine2: utilization(busy_machine2),
            lower_bound: lower_bound_of(timeline.records.iter().map(|r| &r.job)),
        }
    }

    /// Whether the makespan reached the lower bound (proof of optimality).
    ///
    /// A Johnson sequence is always optimal, but the bound is not always
    /// tight, so `false` does not imply a worse ordering exists.
    pub fn is_lower_bound_tight(&self) -> bool {
        self.makespan <= self.lower_bound
    }

    /// Utilization of the given machine.
    pub fn utilization(&self, machine: Machine) -> f64 {
        match machine {
            Machine::First => self.utilization_machine1,
            Machine::Second => self.utilization_machine2,
        }
    }
}

/// Johnson's two-machine makespan lower bound.
///
/// `max(Σd1 + min d2, Σd2 + min d1)`: Machine 2 cannot start before some
/// job leaves Machine 1, and the last job still needs Machine 2 after
/// Machine 1 is done. Zero for an empty list.
pub fn johnson_lower_bound<T: Duration>(jobs: &[Job<T>]) -> T {
    lower_bound_of(jobs.iter())
}

fn lower_bound_of<'a, T, I>(jobs: I) -> T
where
    T: Duration + 'a,
    I: Iterator<Item = &'a Job<T>>,
{
    let mut sum_m1 = T::zero();
    let mut sum_m2 = T::zero();
    let mut min_m1: Option<T> = None;
    let mut min_m2: Option<T> = None;

    for job in jobs {
        sum_m1 = sum_m1 + job.duration_m1;
        sum_m2 = sum_m2 + job.duration_m2;
        min_m1 = Some(min_m1.map_or(job.duration_m1, |m| m.min_of(job.duration_m1)));
        min_m2 = Some(min_m2.map_or(job.duration_m2, |m| m.min_of(job.duration_m2)));
    }

    match (min_m1, min_m2) {
        (Some(min_m1), Some(min_m2)) => (sum_m1 + min_m2).max_of(sum_m2 + min_m1),
        _ => T::zero(),
    }
}
