//! Timeline (solution) model.
//!
//! A timeline records when each job of an ordering runs on each machine,
//! plus aggregate makespan and idle figures. It is derived data: rebuilt
//! from a sequence on every request and never mutated afterwards.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use serde::{Deserialize, Serialize};

use super::{Duration, Job, Machine};

/// Per-job timing on both machines.
///
/// Invariants (for non-negative durations):
/// - `machine1_end = machine1_start + duration_m1`
/// - `machine2_end = machine2_start + duration_m2`
/// - `machine2_start = max(machine1_end, previous machine2_end)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord<T = i64> {
    /// Zero-based position in the sequence.
    pub position: usize,
    /// The job described.
    pub job: Job<T>,
    /// Start on Machine 1.
    pub machine1_start: T,
    /// End on Machine 1.
    pub machine1_end: T,
    /// Start on Machine 2.
    pub machine2_start: T,
    /// End on Machine 2.
    pub machine2_end: T,
    /// Gap Machine 2 sat idle immediately before this job.
    pub idle_before_m2: T,
}

/// Aggregate figures over a whole timeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary<T = i64> {
    /// Makespan: completion time of the last job on Machine 2.
    pub total_elapsed_time: T,
    /// Always zero: Machine 1 runs jobs back-to-back.
    pub idle_time_machine1: T,
    /// Sum of the gaps where Machine 2 waited for Machine 1.
    pub idle_time_machine2: T,
}

/// A stretch of time in which a machine is idle before a job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdleInterval<T = i64> {
    /// Idle machine.
    pub machine: Machine,
    /// Idle from (inclusive).
    pub start: T,
    /// Idle until (exclusive); the next job starts here.
    pub end: T,
    /// Position of the job that ends the idle stretch.
    pub before_job: usize,
}

/// Timing records in sequence order plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline<T = i64> {
    /// One record per job, in sequence order.
    pub records: Vec<TimingRecord<T>>,
    /// Aggregate makespan and idle figures.
    pub summary: ScheduleSummary<T>,
}

impl<T: Duration> TimingRecord<T> {
    /// `(start, end)` on the given machine.
    #[inline]
    pub fn span(&self, machine: Machine) -> (T, T) {
        match machine {
            Machine::First => (self.machine1_start, self.machine1_end),
            Machine::Second => (self.machine2_start, self.machine2_end),
        }
    }

    /// Whether the job occupies `machine` at time `t` (half-open span).
    pub fn contains(&self, machine: Machine, t: T) -> bool {
        let (start, end) = self.span(machine);
        start <= t && t < end
    }
}

impl<T: Duration> IdleInterval<T> {
    /// Idle length (`end - start`).
    #[inline]
    pub fn length(&self) -> T {
        self.end - self.start
    }
}

impl<T: Duration> Timeline<T> {
    /// Makespan (shorthand for `summary.total_elapsed_time`).
    #[inline]
    pub fn makespan(&self) -> T {
        self.summary.total_elapsed_time
    }

    /// Number of timing records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the timeline has no jobs.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Job names in sequence order.
    pub fn job_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.job.name.as_str()).collect()
    }

    /// Idle stretches on Machine 2, in time order.
    ///
    /// Lengths sum to `summary.idle_time_machine2`. Machine 1 never idles,
    /// so it contributes no intervals.
    pub fn idle_intervals(&self) -> Vec<IdleInterval<T>> {
        self.records
            .iter()
            .filter(|r| r.idle_before_m2.is_strictly_positive())
            .map(|r| IdleInterval {
                machine: Machine::Second,
                start: r.machine2_start - r.idle_before_m2,
                end: r.machine2_start,
                before_job: r.position,
            })
            .collect()
    }

    /// Finds the record occupying `machine` at time `t`.
    ///
    /// Returns `None` when the machine is idle at `t` or `t` lies outside
    /// the timeline.
    pub fn record_at(&self, machine: Machine, t: T) -> Option<&TimingRecord<T>> {
        self.records.iter().find(|r| r.contains(machine, t))
    }

    /// Total processing time on a machine.
    pub fn busy_time(&self, machine: Machine) -> T {
        self.records
            .iter()
            .fold(T::zero(), |acc, r| acc + r.job.duration_on(machine))
    }
}

impl<T: Duration> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            summary: ScheduleSummary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        position: usize,
        name: &str,
        m1: (i64, i64),
        m2: (i64, i64),
        idle: i64,
    ) -> TimingRecord {
        TimingRecord {
            position,
            job: Job::new(name, m1.1 - m1.0, m2.1 - m2.0),
            machine1_start: m1.0,
            machine1_end: m1.1,
            machine2_start: m2.0,
            machine2_end: m2.1,
            idle_before_m2: idle,
        }
    }

    fn sample_timeline() -> Timeline {
        // X: M1 [0,2) M2 [2,5); Y: M1 [2,8) M2 [8,9)
        Timeline {
            records: vec![
                record(0, "X", (0, 2), (2, 5), 2),
                record(1, "Y", (2, 8), (8, 9), 3),
            ],
            summary: ScheduleSummary {
                total_elapsed_time: 9,
                idle_time_machine1: 0,
                idle_time_machine2: 5,
            },
        }
    }

    #[test]
    fn test_record_span() {
        let t = sample_timeline();
        assert_eq!(t.records[1].span(Machine::First), (2, 8));
        assert_eq!(t.records[1].span(Machine::Second), (8, 9));
    }

    #[test]
    fn test_idle_intervals() {
        let t = sample_timeline();
        let idle = t.idle_intervals();
        assert_eq!(idle.len(), 2);
        assert_eq!((idle[0].start, idle[0].end), (0, 2));
        assert_eq!((idle[1].start, idle[1].end), (5, 8));
        assert_eq!(idle[1].before_job, 1);
        assert!(idle.iter().all(|i| i.machine == Machine::Second));
        let total: i64 = idle.iter().map(|i| i.length()).sum();
        assert_eq!(total, t.summary.idle_time_machine2);
    }

    #[test]
    fn test_record_at() {
        let t = sample_timeline();
        assert_eq!(t.record_at(Machine::First, 0).unwrap().job.name, "X");
        assert_eq!(t.record_at(Machine::First, 2).unwrap().job.name, "Y");
        assert_eq!(t.record_at(Machine::Second, 8).unwrap().job.name, "Y");
        assert!(t.record_at(Machine::Second, 6).is_none()); // idle
        assert!(t.record_at(Machine::Second, 9).is_none()); // past the end
    }

    #[test]
    fn test_busy_time() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(Machine::First), 8);
        assert_eq!(t.busy_time(Machine::Second), 4);
    }

    #[test]
    fn test_empty_timeline() {
        let t: Timeline = Timeline::default();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert!(t.idle_intervals().is_empty());
        assert!(t.job_names().is_empty());
    }

    #[test]
    fn test_timeline_serde() {
        let t = sample_timeline();
        let json = serde_json::to_string(&t).unwrap();
        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
