//! Auto-fill scheduling and selection metrics.
//!
//! # Algorithm
//!
//! `ScheduleBuilder` fills a selection greedily in degree-plan priority
//! order, skipping conflicting courses and stopping at the credit ceiling.
//! It is not optimal and never backtracks, but it is deterministic.
//!
//! # Metrics
//!
//! `CreditLoad` classifies a selection's credit total; `Timetable` lays the
//! selection out by weekday.

mod autofill;
mod load;

pub use autofill::{build, AutoFillOutcome, ScheduleBuilder, UNRANKED};
pub use load::{CreditLoad, LoadStatus, Timetable};
