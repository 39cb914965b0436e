//! Two-machine timeline derivation and KPI evaluation.
//!
//! # Algorithm
//!
//! `build_timeline` simulates both machines over a given ordering. Machine 1
//! runs jobs back-to-back; Machine 2 starts each job once Machine 1 has
//! released it and its own previous job is done. Any ordering is accepted,
//! optimal or not.
//!
//! # KPI
//!
//! `TimelineKpi` reports makespan, per-machine busy time and utilization,
//! and Johnson's makespan lower bound.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling", Ch. 10

mod builder;
mod kpi;

pub use builder::build_timeline;
pub use kpi::{johnson_lower_bound, TimelineKpi};
