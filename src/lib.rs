//! Two-machine flow-shop sequencing for the U-Engine ecosystem.
//!
//! Orders jobs that visit Machine 1 then Machine 2 so that the last job
//! finishes as early as possible (Johnson's rule), and derives the
//! per-machine timeline of any ordering.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Machine`, `TimingRecord`,
//!   `ScheduleSummary`, `IdleInterval`, `Timeline`
//! - **`sequencing`**: Johnson's rule (`JohnsonSequencer`, `sequence`)
//! - **`timeline`**: Two-machine simulation (`build_timeline`) and KPIs
//! - **`validation`**: Boundary parsing of raw job input
//! - **`board`**: Growing job list with snapshot-and-process
//! - **`report`**: Plain-text result formatting
//! - **`generate`**: Random instance generation
//!
//! # Example
//!
//! ```
//! use u_flowshop::models::Job;
//! use u_flowshop::sequencing::sequence;
//! use u_flowshop::timeline::build_timeline;
//!
//! let jobs = vec![
//!     Job::new("A", 5, 2),
//!     Job::new("B", 1, 6),
//!     Job::new("C", 9, 7),
//!     Job::new("D", 3, 8),
//!     Job::new("E", 10, 4),
//! ];
//! let ordered = sequence(&jobs);
//! let timeline = build_timeline(&ordered);
//! assert_eq!(timeline.job_names(), vec!["B", "D", "C", "E", "A"]);
//! assert_eq!(timeline.summary.total_elapsed_time, 30);
//! ```
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules
//!   with setup times included"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

pub mod board;
pub mod generate;
pub mod models;
pub mod report;
pub mod sequencing;
pub mod timeline;
pub mod validation;
