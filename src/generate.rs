//! Random problem instances.
//!
//! Generates job lists with uniformly distributed integer durations, for
//! benchmarks and property tests. Seed the RNG for reproducible instances.
//!
//! # Reference
//! Taillard (1993), "Benchmarks for basic scheduling problems" (uniform
//! U[1, 99] processing times)

use rand::Rng;

use crate::models::Job;

/// Uniform random instance generator.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_flowshop::generate::InstanceGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let jobs = InstanceGenerator::new(1, 99).generate(&mut rng, 20);
/// assert_eq!(jobs.len(), 20);
/// assert!(jobs.iter().all(|j| (1..=99).contains(&j.duration_m1)));
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    min_duration: i64,
    max_duration: i64,
    name_prefix: String,
}

impl InstanceGenerator {
    /// Creates a generator drawing durations from `[min, max]`.
    ///
    /// Bounds are swapped if given in reverse.
    pub fn new(min_duration: i64, max_duration: i64) -> Self {
        Self {
            min_duration: min_duration.min(max_duration),
            max_duration: min_duration.max(max_duration),
            name_prefix: "J".to_string(),
        }
    }

    /// Sets the job name prefix (names are `{prefix}{1..=n}`).
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Duration bounds `(min, max)`, inclusive.
    pub fn bounds(&self) -> (i64, i64) {
        (self.min_duration, self.max_duration)
    }

    /// Generates `count` jobs.
    pub fn generate<R: Rng>(&self, rng: &mut R, count: usize) -> Vec<Job> {
        (1..=count)
            .map(|i| {
                Job::new(
                    format!("{}{i}", self.name_prefix),
                    rng.random_range(self.min_duration..=self.max_duration),
                    rng.random_range(self.min_duration..=self.max_duration),
                )
            })
            .collect()
    }
}

impl Default for InstanceGenerator {
    fn default() -> Self {
        Self::new(1, 99)
    }
}

/// Generates `count` jobs with durations in `[min, max]`.
pub fn random_jobs<R: Rng>(rng: &mut R, count: usize, min: i64, max: i64) -> Vec<Job> {
    InstanceGenerator::new(min, max).generate(rng, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generate_count_and_names() {
        let mut rng = SmallRng::seed_from_u64(5);
        let jobs = InstanceGenerator::new(1, 10)
            .with_name_prefix("W")
            .generate(&mut rng, 3);
        let names: Vec<_> = jobs.iter().map(|j| j.name.as_str()).collect();
        assert_eq!(names, vec!["W1", "W2", "W3"]);
    }

    #[test]
    fn test_generate_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(9);
        let jobs = random_jobs(&mut rng, 200, 3, 7);
        assert!(jobs
            .iter()
            .all(|j| (3..=7).contains(&j.duration_m1) && (3..=7).contains(&j.duration_m2)));
    }

    #[test]
    fn test_reversed_bounds() {
        let generator = InstanceGenerator::new(10, 2);
        assert_eq!(generator.bounds(), (2, 10));
    }

    #[test]
    fn test_seeded_reproducible() {
        let a = random_jobs(&mut SmallRng::seed_from_u64(77), 15, 1, 99);
        let b = random_jobs(&mut SmallRng::seed_from_u64(77), 15, 1, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(InstanceGenerator::default().generate(&mut rng, 0).is_empty());
    }
}
