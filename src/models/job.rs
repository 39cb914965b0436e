//! Job model.
//!
//! A job visits Machine 1 and then Machine 2, once each, in that order.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use serde::{Deserialize, Serialize};

use super::{Duration, Machine};

/// A job in a two-machine flow shop.
///
/// Immutable once built: the sequencer and timeline builder only read it.
/// Names identify jobs for display and need not be unique.
///
/// # Time Representation
/// Durations share one unit chosen by the caller (hours in the classic
/// textbook examples). Both are expected to be strictly positive; see
/// [`crate::validation`] for boundary checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job<T = i64> {
    /// Display name.
    pub name: String,
    /// Processing time on Machine 1.
    pub duration_m1: T,
    /// Processing time on Machine 2.
    pub duration_m2: T,
}

impl<T: Duration> Job<T> {
    /// Creates a new job.
    pub fn new(name: impl Into<String>, duration_m1: T, duration_m2: T) -> Self {
        Self {
            name: name.into(),
            duration_m1,
            duration_m2,
        }
    }

    /// Processing time on the given machine.
    #[inline]
    pub fn duration_on(&self, machine: Machine) -> T {
        match machine {
            Machine::First => self.duration_m1,
            Machine::Second => self.duration_m2,
        }
    }

    /// Johnson sort key: `min(duration_m1, duration_m2)`.
    #[inline]
    pub fn min_duration(&self) -> T {
        self.duration_m1.min_of(self.duration_m2)
    }

    /// Whether Johnson's rule places this job in the front set
    /// (`duration_m1 <= duration_m2`). Ties go to the front.
    #[inline]
    pub fn prefers_front(&self) -> bool {
        self.duration_m1 <= self.duration_m2
    }

    /// Sum of both processing times.
    pub fn total_duration(&self) -> T {
        self.duration_m1 + self.duration_m2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_new() {
        let job = Job::new("A", 5_i64, 2);
        assert_eq!(job.name, "A");
        assert_eq!(job.duration_m1, 5);
        assert_eq!(job.duration_m2, 2);
        assert_eq!(job.total_duration(), 7);
    }

    #[test]
    fn test_duration_on() {
        let job = Job::new("B", 1_i64, 6);
        assert_eq!(job.duration_on(Machine::First), 1);
        assert_eq!(job.duration_on(Machine::Second), 6);
    }

    #[test]
    fn test_min_duration_and_side() {
        let short_first = Job::new("B", 1_i64, 6);
        assert_eq!(short_first.min_duration(), 1);
        assert!(short_first.prefers_front());

        let short_second = Job::new("A", 5_i64, 2);
        assert_eq!(short_second.min_duration(), 2);
        assert!(!short_second.prefers_front());
    }

    #[test]
    fn test_equal_durations_go_front() {
        let job = Job::new("T", 4_i64, 4);
        assert!(job.prefers_front());
        assert_eq!(job.min_duration(), 4);
    }

    #[test]
    fn test_real_durations() {
        let job = Job::new("R", 1.5_f64, 0.25);
        assert!((job.min_duration() - 0.25).abs() < 1e-12);
        assert!(!job.prefers_front());
    }

    #[test]
    fn test_job_serde() {
        let job = Job::new("C", 9_i64, 7);
        let json = serde_json::to_string(&job).unwrap();
        assert_eq!(json, r#"{"name":"C","duration_m1":9,"duration_m2":7}"#);
        let back: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(back, job);
    }
}
