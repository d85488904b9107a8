//! Course registration core for the U-Engine ecosystem.
//!
//! Decides which courses a student may add, fills a conflict-free
//! schedule in degree-plan order, and reports time conflicts. Everything
//! in the core is a pure function of its inputs; re-run it after any
//! change to the catalog, the student, or the selection.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CourseOffering`, `MeetingTime`,
//!   `Weekday`, `StudentRecord`, `Selection`, `ConflictEdge`
//! - **`conflict`**: Pairwise time-overlap predicate and `ConflictReport`
//! - **`eligibility`**: Composable recommendation rules and filter
//! - **`scheduler`**: Greedy priority auto-fill, credit load, timetable
//! - **`store`**: Owned catalog with seat updates, key-value persistence
//! - **`validation`**: Catalog integrity checks
//! - **`config`**: Credit-band settings
//! - **`fixtures`**: Seed catalog and student
//!
//! # Example
//!
//! ```
//! use u_enroll::conflict::ConflictReport;
//! use u_enroll::eligibility::eligible;
//! use u_enroll::fixtures;
//! use u_enroll::models::Selection;
//! use u_enroll::scheduler::ScheduleBuilder;
//!
//! let catalog = fixtures::sample_catalog();
//! let student = fixtures::sample_student();
//!
//! let candidates = eligible(&catalog, &student, &Selection::new());
//! assert!(!candidates.iter().any(|c| c.code == "OOP200")); // full
//!
//! let outcome = ScheduleBuilder::new().auto_fill(&catalog, &student, &Selection::new());
//! assert!(!ConflictReport::of(&outcome.selection).has_conflicts());
//! ```

pub mod config;
pub mod conflict;
pub mod eligibility;
pub mod fixtures;
pub mod models;
pub mod scheduler;
pub mod store;
pub mod validation;
