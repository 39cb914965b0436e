//! Job sequencing for the two-machine flow shop.
//!
//! # Algorithm
//!
//! `JohnsonSequencer` applies Johnson's rule, which is makespan-optimal
//! for `F2 || C_max`:
//!
//! 1. Jobs with `d1 <= d2` form the front set, ascending by `min(d1, d2)`.
//! 2. Jobs with `d1 > d2` form the back set, descending by `min(d1, d2)`.
//!
//! # Usage
//!
//! ```
//! use u_flowshop::models::Job;
//! use u_flowshop::sequencing::{JohnsonSequencer, TieBreaker};
//!
//! let jobs = vec![Job::new("P", 3_i64, 3), Job::new("Q", 3_i64, 5)];
//! let sequencer = JohnsonSequencer::new().with_tie_breaker(TieBreaker::ByName);
//! let names: Vec<_> = sequencer.sequence(&jobs).into_iter().map(|j| j.name).collect();
//! assert_eq!(names, vec!["P", "Q"]);
//! ```
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules
//!   with setup times included", Naval Research Logistics Quarterly 1(1)
//! - Pinedo (2016), "Scheduling", Ch. 6.1: Flow Shops with Unlimited Buffers

mod johnson;

pub use johnson::{sequence, JohnsonPartition, JohnsonSequencer, TieBreaker};
