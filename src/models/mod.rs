//! Registration domain models.
//!
//! Provides the data types the registration core works on: catalog
//! offerings, their weekly meeting patterns, student records, and the
//! student's selection.
//!
//! # Domain Mappings
//!
//! | u-enroll | Scheduling analogue |
//! |----------|---------------------|
//! | CourseOffering | Task with a fixed weekly time window |
//! | MeetingTime | Recurring time window |
//! | StudentRecord | Dispatching context (what is allowed, in what order) |
//! | Selection | Schedule |

mod course;
mod error;
mod meeting;
mod selection;
mod student;

pub use course::CourseOffering;
pub use error::ModelError;
pub use meeting::{format_hhmm, parse_hhmm, MeetingTime, Weekday, MINUTES_PER_DAY};
pub use selection::{ConflictEdge, Selection};
pub use student::StudentRecord;
