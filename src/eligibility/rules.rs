//! Built-in eligibility rules.
//!
//! | Rule | Admits a course when |
//! |------|----------------------|
//! | PREREQ | every prerequisite is completed or in progress |
//! | SEATS | at least one seat is open |
//! | NOT_SELECTED | its code is not in the current selection |
//! | NO_CONFLICT | it collides with no selected course |

use super::{EligibilityContext, EligibilityRule};
use crate::conflict::conflicts_with_any;
use crate::models::CourseOffering;

/// Prerequisites covered by completed or in-progress courses.
///
/// An empty prerequisite set always passes. A prerequisite code the
/// student never took simply fails to match; it is not an error.
#[derive(Debug, Clone, Copy)]
pub struct PrerequisitesMet;

impl EligibilityRule for PrerequisitesMet {
    fn name(&self) -> &'static str {
        "PREREQ"
    }

    fn admits(&self, course: &CourseOffering, context: &EligibilityContext<'_>) -> bool {
        context.student.satisfies(&course.prerequisites)
    }

    fn description(&self) -> &'static str {
        "Prerequisites completed or in progress"
    }
}

/// At least one seat open.
#[derive(Debug, Clone, Copy)]
pub struct SeatsAvailable;

impl EligibilityRule for SeatsAvailable {
    fn name(&self) -> &'static str {
        "SEATS"
    }

    fn admits(&self, course: &CourseOffering, _context: &EligibilityContext<'_>) -> bool {
        course.has_seats()
    }

    fn description(&self) -> &'static str {
        "Seats available"
    }
}

/// Not already in the selection.
#[derive(Debug, Clone, Copy)]
pub struct NotSelected;

impl EligibilityRule for NotSelected {
    fn name(&self) -> &'static str {
        "NOT_SELECTED"
    }

    fn admits(&self, course: &CourseOffering, context: &EligibilityContext<'_>) -> bool {
        !context.selection.contains(&course.code)
    }

    fn description(&self) -> &'static str {
        "Not already selected"
    }
}

/// No time conflict with any selected course.
#[derive(Debug, Clone, Copy)]
pub struct NoConflict;

impl EligibilityRule for NoConflict {
    fn name(&self) -> &'static str {
        "NO_CONFLICT"
    }

    fn admits(&self, course: &CourseOffering, context: &EligibilityContext<'_>) -> bool {
        !conflicts_with_any(course, context.selection)
    }

    fn description(&self) -> &'static str {
        "No time conflict with the current selection"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Selection, StudentRecord, Weekday};

    fn db200() -> CourseOffering {
        CourseOffering::new("DB200")
            .with_schedule([Weekday::Sun, Weekday::Tue], 600, 675)
            .with_seats(6)
            .with_prerequisite("CS101")
    }

    #[test]
    fn test_prereq_rule() {
        let sel = Selection::new();
        let done = StudentRecord::new("s").with_completed("CS101");
        let taking = StudentRecord::new("s").with_in_progress("CS101");
        let none = StudentRecord::new("s");

        assert!(PrerequisitesMet.admits(&db200(), &EligibilityContext::new(&done, &sel)));
        assert!(PrerequisitesMet.admits(&db200(), &EligibilityContext::new(&taking, &sel)));
        assert!(!PrerequisitesMet.admits(&db200(), &EligibilityContext::new(&none, &sel)));

        let open = CourseOffering::new("ECON201");
        assert!(PrerequisitesMet.admits(&open, &EligibilityContext::new(&none, &sel)));
    }

    #[test]
    fn test_seats_rule() {
        let student = StudentRecord::new("s");
        let sel = Selection::new();
        let ctx = EligibilityContext::new(&student, &sel);

        assert!(SeatsAvailable.admits(&db200(), &ctx));
        assert!(!SeatsAvailable.admits(&db200().with_seats(0), &ctx));
    }

    #[test]
    fn test_not_selected_rule() {
        let student = StudentRecord::new("s");
        let sel = Selection::from_courses([db200()]);
        let ctx = EligibilityContext::new(&student, &sel);

        assert!(!NotSelected.admits(&db200(), &ctx));
        assert!(NotSelected.admits(&CourseOffering::new("IA200"), &ctx));
    }

    #[test]
    fn test_no_conflict_rule() {
        let student = StudentRecord::new("s");
        let sel = Selection::from_courses([db200()]);
        let ctx = EligibilityContext::new(&student, &sel);

        let clash = CourseOffering::new("X").with_schedule([Weekday::Tue], 630, 700);
        let after = CourseOffering::new("Y").with_schedule([Weekday::Tue], 675, 720);
        assert!(!NoConflict.admits(&clash, &ctx));
        assert!(NoConflict.admits(&after, &ctx));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(PrerequisitesMet.name(), "PREREQ");
        assert_eq!(SeatsAvailable.name(), "SEATS");
        assert_eq!(NotSelected.name(), "NOT_SELECTED");
        assert_eq!(NoConflict.name(), "NO_CONFLICT");
        assert_eq!(SeatsAvailable.description(), "Seats available");
    }
}
