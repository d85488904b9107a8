//! Seed catalog and student for demos, tests, and first-run defaults.

use crate::models::Weekday::{Mon, Sun, Thu, Tue, Wed};
use crate::models::{CourseOffering, StudentRecord};

/// Seven offerings across Sun-Thu. OOP200 starts full.
pub fn sample_catalog() -> Vec<CourseOffering> {
    vec![
        CourseOffering::new("DB200")
            .with_title("Advanced Database")
            .with_credits(3)
            .with_schedule([Sun, Tue], 600, 675)
            .with_room("B-214")
            .with_seats(6)
            .with_prerequisite("CS101"),
        CourseOffering::new("OOP200")
            .with_title("Object-Oriented Programming")
            .with_credits(3)
            .with_schedule([Mon, Wed], 750, 825)
            .with_room("C-105")
            .with_seats(0)
            .with_prerequisite("CS101"),
        CourseOffering::new("IA200")
            .with_title("Intro to Information Assurance")
            .with_credits(3)
            .with_schedule([Sun, Tue], 780, 855)
            .with_room("B-118")
            .with_seats(12)
            .with_prerequisite("CS101"),
        CourseOffering::new("MGT300")
            .with_title("Strategic Management")
            .with_credits(3)
            .with_schedule([Mon, Wed], 540, 615)
            .with_room("A-021")
            .with_seats(18)
            .with_prerequisite("ENG101"),
        CourseOffering::new("ECON201")
            .with_title("Microeconomics")
            .with_credits(3)
            .with_schedule([Sun, Tue], 480, 555)
            .with_room("A-115")
            .with_seats(9),
        CourseOffering::new("ENT300")
            .with_title("Entrepreneurship")
            .with_credits(3)
            .with_schedule([Mon, Wed], 870, 945)
            .with_room("D-201")
            .with_seats(21)
            .with_prerequisite("ENG101"),
        CourseOffering::new("LAB201")
            .with_title("Data Analytics Lab")
            .with_credits(1)
            .with_schedule([Thu], 600, 720)
            .with_room("Lab-3")
            .with_seats(2)
            .with_prerequisite("STAT101"),
    ]
}

/// A second-year MIS student with a six-course degree plan.
pub fn sample_student() -> StudentRecord {
    StudentRecord::new("202100121")
        .with_name("Dana Alzahid")
        .with_program("B.Sc. MIS")
        .with_completed("MATH101")
        .with_completed("CS101")
        .with_completed("STAT101")
        .with_completed("ENG101")
        .with_in_progress("PHYS101")
        .with_priority(["DB200", "OOP200", "IA200", "MGT300", "ECON201", "ENT300"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_catalog;

    #[test]
    fn test_sample_catalog_is_valid() {
        assert!(validate_catalog(&sample_catalog()).is_ok());
    }

    #[test]
    fn test_sample_times() {
        let db = &sample_catalog()[0];
        assert_eq!(db.meeting.label(), "Sun/Tue 10:00-11:15");
    }
}
