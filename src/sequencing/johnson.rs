//! Johnson's rule.
//!
//! Sorts all jobs once by `min(d1, d2)` and walks the sorted list, filling
//! the output from both ends toward the middle: front-set jobs at a
//! forward cursor, back-set jobs at a backward cursor.
//!
//! # Complexity
//! O(n log n) time (the sort), O(n) extra space.

use std::cmp::Ordering;

use tracing::debug;

use crate::models::{Duration, Job};

/// How jobs with equal `min(d1, d2)` are ordered.
///
/// Any choice yields the same makespan; the policy only fixes which of
/// several optimal sequences is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Keep submission order (stable sort).
    #[default]
    InputOrder,
    /// Lexicographic by job name, then submission order.
    ByName,
}

/// Johnson's split of a job list, as indices into the input.
///
/// `front` followed by `back` is the full sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JohnsonPartition {
    /// Jobs with `d1 <= d2`, ascending by `min(d1, d2)`.
    pub front: Vec<usize>,
    /// Jobs with `d1 > d2`, descending by `min(d1, d2)`.
    pub back: Vec<usize>,
}

impl JohnsonPartition {
    /// Full sequence (`front` then `back`).
    pub fn sequence(&self) -> Vec<usize> {
        self.front.iter().chain(self.back.iter()).copied().collect()
    }
}

/// Two-machine flow-shop sequencer implementing Johnson's rule.
///
/// Pure: holds only configuration and never retains the job list.
///
/// # Example
///
/// ```
/// use u_flowshop::models::Job;
/// use u_flowshop::sequencing::JohnsonSequencer;
///
/// let jobs = vec![Job::new("A", 5_i64, 2), Job::new("B", 1, 6)];
/// let order = JohnsonSequencer::new().sequence_indices(&jobs);
/// assert_eq!(order, vec![1, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct JohnsonSequencer {
    tie_breaker: TieBreaker,
}

impl JohnsonSequencer {
    /// Creates a sequencer with the default tie-breaker (`InputOrder`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tie-breaking policy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// The configured tie-breaking policy.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Returns a permutation of `0..jobs.len()` in Johnson order.
    pub fn sequence_indices<T: Duration>(&self, jobs: &[Job<T>]) -> Vec<usize> {
        self.fill_from_both_ends(jobs).0
    }

    /// Returns the jobs in Johnson order.
    ///
    /// The result is a permutation of `jobs`: same values, same length.
    pub fn sequence<T: Duration>(&self, jobs: &[Job<T>]) -> Vec<Job<T>> {
        self.sequence_indices(jobs)
            .into_iter()
            .map(|i| jobs[i].clone())
            .collect()
    }

    /// Returns the front/back split behind the sequence.
    pub fn partition<T: Duration>(&self, jobs: &[Job<T>]) -> JohnsonPartition {
        let (mut order, split) = self.fill_from_both_ends(jobs);
        let back = order.split_off(split);
        JohnsonPartition { front: order, back }
    }

    /// Sorted walk with two cursors. Returns the sequence and the index
    /// where the back set begins.
    fn fill_from_both_ends<T: Duration>(&self, jobs: &[Job<T>]) -> (Vec<usize>, usize) {
        let n = jobs.len();
        let mut sorted: Vec<usize> = (0..n).collect();
        sorted.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));

        let mut order = vec![0usize; n];
        let mut front = 0;
        let mut back = n;
        for idx in sorted {
            if jobs[idx].prefers_front() {
                order[front] = idx;
                front += 1;
            } else {
                back -= 1;
                order[back] = idx;
            }
        }

        debug!(
            jobs = n,
            front_set = front,
            back_set = n - front,
            tie_breaker = ?self.tie_breaker,
            "Johnson sequence computed"
        );

        (order, front)
    }

    fn compare<T: Duration>(&self, a: &Job<T>, b: &Job<T>) -> Ordering {
        let by_key = compare_durations(a.min_duration(), b.min_duration());
        match self.tie_breaker {
            TieBreaker::InputOrder => by_key,
            TieBreaker::ByName => by_key.then_with(|| a.name.cmp(&b.name)),
        }
    }
}

/// Orders jobs by Johnson's rule with the default policy.
///
/// Shorthand for `JohnsonSequencer::new().sequence(jobs)`.
pub fn sequence<T: Duration>(jobs: &[Job<T>]) -> Vec<Job<T>> {
    JohnsonSequencer::new().sequence(jobs)
}

/// Total order over durations: comparable values by value, NaN after all
/// of them.
fn compare_durations<T: Duration>(a: T, b: T) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ord) => ord,
        None => {
            let a_nan = a.partial_cmp(&a).is_none();
            let b_nan = b.partial_cmp(&b).is_none();
            a_nan.cmp(&b_nan)
        }
    }
}
