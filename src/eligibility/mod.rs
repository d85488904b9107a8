//! Eligibility rules and filter for course recommendations.
//!
//! A course is recommended to a student when every rule in the filter
//! admits it. The standard filter combines four independent rules:
//! prerequisites covered, a seat open, not already selected, and no time
//! conflict with the current selection.
//!
//! # Usage
//!
//! ```
//! use u_enroll::eligibility::{rules, EligibilityFilter};
//! use u_enroll::fixtures;
//! use u_enroll::models::Selection;
//!
//! let catalog = fixtures::sample_catalog();
//! let student = fixtures::sample_student();
//!
//! let filter = EligibilityFilter::standard();
//! let candidates = filter.eligible(&catalog, &student, &Selection::new());
//! assert!(candidates.iter().all(|c| c.seats_left > 0));
//!
//! // A custom filter can drop or add rules.
//! let seats_only = EligibilityFilter::new().with_rule(rules::SeatsAvailable);
//! assert!(seats_only.eligible(&catalog, &student, &Selection::new()).len() >= candidates.len());
//! ```

mod filter;
pub mod rules;

pub use filter::{eligible, EligibilityFilter};

use crate::models::{CourseOffering, Selection, StudentRecord};
use std::fmt::Debug;

/// Inputs a rule may inspect besides the course itself.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityContext<'a> {
    /// The student asking for recommendations.
    pub student: &'a StudentRecord,
    /// Courses the student has already picked.
    pub selection: &'a Selection,
}

impl<'a> EligibilityContext<'a> {
    /// Creates a context.
    pub fn new(student: &'a StudentRecord, selection: &'a Selection) -> Self {
        Self { student, selection }
    }
}

/// A single admission criterion.
///
/// Rules are evaluated independently; the filter admits a course only if
/// every rule does.
pub trait EligibilityRule: Send + Sync + Debug {
    /// Rule name (e.g., "PREREQ", "SEATS").
    fn name(&self) -> &'static str;

    /// Whether the course passes this rule.
    fn admits(&self, course: &CourseOffering, context: &EligibilityContext<'_>) -> bool;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
