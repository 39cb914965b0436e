//! Flow-shop domain models.
//!
//! Provides the data types exchanged between the sequencer, the timeline
//! builder, and whatever presents the result (report, Gantt renderer).
//!
//! # Domain Mappings
//!
//! | u-flowshop | Manufacturing | Print Shop | Software Build |
//! |------------|---------------|------------|----------------|
//! | Job | Work Order | Print Run | Package |
//! | Machine::First | Cutting | Printing | Compile |
//! | Machine::Second | Finishing | Binding | Test |
//! | Timeline | Production Plan | Press Schedule | CI Timeline |

mod duration;
mod job;
mod machine;
mod timeline;

pub use duration::Duration;
pub use job::Job;
pub use machine::Machine;
pub use timeline::{IdleInterval, ScheduleSummary, Timeline, TimingRecord};
