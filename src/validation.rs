//! Input validation for flow-shop jobs.
//!
//! Raw job input (name plus two duration strings) is parsed and checked
//! here, before it reaches the sequencer. Detects:
//! - Blank job names
//! - Durations that do not parse as the chosen time unit
//! - Durations that are zero, negative, infinite, or NaN
//! - Job lists whose total processing time does not fit the time unit
//!
//! The sequencer and timeline builder do not re-validate: non-positive
//! durations flow through them as ordinary numbers and produce a finite
//! but meaningless makespan.

use std::str::FromStr;

use thiserror::Error;

use crate::models::{Duration, Job, Machine};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Job name is empty or whitespace.
    EmptyName,
    /// Duration text is not a number of the expected type.
    UnparsableDuration,
    /// Duration is not a strictly positive, finite number.
    InvalidDuration,
    /// Total processing time of the list overflows the time unit.
    DurationOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn empty_name() -> Self {
        Self::new(ValidationErrorKind::EmptyName, "Job name must not be empty")
    }

    fn invalid_duration<T: Duration>(job: &str, machine: Machine, value: T) -> Self {
        Self::new(
            ValidationErrorKind::InvalidDuration,
            format!("Job '{job}': {machine} duration must be a positive finite number, got {value}"),
        )
    }

    fn overflow(job: &str) -> Self {
        Self::new(
            ValidationErrorKind::DurationOverflow,
            format!("Job '{job}': total processing time exceeds the representable range"),
        )
    }
}

/// Accepted duration: strictly positive and finite.
fn is_valid_duration<T: Duration>(value: T) -> bool {
    value.is_strictly_positive() && value.is_finite_value()
}

/// Parses one job from raw text fields.
///
/// Fields are trimmed. The first problem found is returned.
///
/// # Example
///
/// ```
/// use u_flowshop::validation::{parse_job, ValidationErrorKind};
///
/// let job = parse_job::<i64>("A", " 5 ", "2").unwrap();
/// assert_eq!((job.duration_m1, job.duration_m2), (5, 2));
///
/// let err = parse_job::<i64>("B", "0", "3").unwrap_err();
/// assert_eq!(err.kind, ValidationErrorKind::InvalidDuration);
/// ```
pub fn parse_job<T>(
    name: &str,
    duration_m1: &str,
    duration_m2: &str,
) -> Result<Job<T>, ValidationError>
where
    T: Duration + FromStr,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::empty_name());
    }

    let d1 = parse_duration::<T>(name, Machine::First, duration_m1)?;
    let d2 = parse_duration::<T>(name, Machine::Second, duration_m2)?;
    Ok(Job::new(name, d1, d2))
}

fn parse_duration<T>(job: &str, machine: Machine, text: &str) -> Result<T, ValidationError>
where
    T: Duration + FromStr,
{
    let text = text.trim();
    let value = text.parse::<T>().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::UnparsableDuration,
            format!("Job '{job}': {machine} duration '{text}' is not a number"),
        )
    })?;

    if !is_valid_duration(value) {
        return Err(ValidationError::invalid_duration(job, machine, value));
    }
    Ok(value)
}

/// Total processing time over both machines.
///
/// Every clock in a timeline stays at or below this value, so a list
/// whose horizon fits the time unit never overflows in
/// [`crate::timeline::build_timeline`]. Returns a `DurationOverflow`
/// error naming the first job that pushes the sum out of range.
pub fn total_horizon<T: Duration>(jobs: &[Job<T>]) -> Result<T, ValidationError> {
    let mut total = T::zero();
    for job in jobs {
        total = total
            .checked_sum(job.duration_m1)
            .and_then(|t| t.checked_sum(job.duration_m2))
            .ok_or_else(|| ValidationError::overflow(&job.name))?;
    }
    Ok(total)
}

/// Checks that appending `job` keeps the list's total processing time in
/// range.
pub fn check_append<T: Duration>(
    jobs: &[Job<T>],
    job: &Job<T>,
) -> Result<(), ValidationError> {
    total_horizon(jobs)?
        .checked_sum(job.duration_m1)
        .and_then(|t| t.checked_sum(job.duration_m2))
        .map(|_| ())
        .ok_or_else(|| ValidationError::overflow(&job.name))
}

/// Validates an already-built job list.
///
/// Checks every job for a non-blank name and strictly positive, finite
/// durations on both machines, then checks that the total processing
/// time fits the time unit. An empty list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs<T: Duration>(jobs: &[Job<T>]) -> ValidationResult {
    let mut errors = Vec::new();

    for job in jobs {
        if job.name.trim().is_empty() {
            errors.push(ValidationError::empty_name());
        }
        for machine in Machine::ALL {
            let value = job.duration_on(machine);
            if !is_valid_duration(value) {
                errors.push(ValidationError::invalid_duration(&job.name, machine, value));
            }
        }
    }

    if let Err(e) = total_horizon(jobs) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
