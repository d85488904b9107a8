//! Selection (student's chosen course set) model.
//!
//! A selection keeps courses in the order the student picked them. Codes
//! are unique within a selection; adding a course whose code is already
//! present is a no-op.

use serde::{Deserialize, Serialize};

use super::CourseOffering;

/// An ordered, duplicate-free set of chosen courses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CourseOffering>", into = "Vec<CourseOffering>")]
pub struct Selection {
    courses: Vec<CourseOffering>,
}

/// A pair of selected courses and whether their meetings collide.
///
/// The pair is unordered; `first` is the course picked earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEdge {
    /// Code of the earlier-selected course.
    pub first: String,
    /// Code of the later-selected course.
    pub second: String,
    /// Whether the two meetings overlap.
    pub conflict: bool,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from courses, keeping the first occurrence of
    /// each code.
    pub fn from_courses(courses: impl IntoIterator<Item = CourseOffering>) -> Self {
        let mut selection = Self::new();
        for course in courses {
            selection.add(course);
        }
        selection
    }

    /// Appends a course unless its code is already present.
    ///
    /// Returns `true` if the course was added.
    pub fn add(&mut self, course: CourseOffering) -> bool {
        if self.contains(&course.code) {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Returns a copy with `course` appended (unchanged on duplicate code).
    pub fn with_course(mut self, course: CourseOffering) -> Self {
        self.add(course);
        self
    }

    /// Removes the course with the given code.
    ///
    /// Returns `true` if a course was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.code != code);
        self.courses.len() != before
    }

    /// Whether a course with this code is selected.
    pub fn contains(&self, code: &str) -> bool {
        self.courses.iter().any(|c| c.code == code)
    }

    /// Finds a selected course by code.
    pub fn get(&self, code: &str) -> Option<&CourseOffering> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Sum of credits over selected courses.
    pub fn total_credits(&self) -> u32 {
        self.courses
            .iter()
            .fold(0u32, |total, c| total.saturating_add(c.credits))
    }

    /// Selected codes in selection order.
    pub fn codes(&self) -> Vec<String> {
        self.courses.iter().map(|c| c.code.clone()).collect()
    }

    /// Selected courses in selection order.
    pub fn courses(&self) -> &[CourseOffering] {
        &self.courses
    }

    /// Iterates selected courses in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, CourseOffering> {
        self.courses.iter()
    }

    /// Number of selected courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl From<Vec<CourseOffering>> for Selection {
    fn from(courses: Vec<CourseOffering>) -> Self {
        Self::from_courses(courses)
    }
}

impl From<Selection> for Vec<CourseOffering> {
    fn from(selection: Selection) -> Self {
        selection.courses
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a CourseOffering;
    type IntoIter = std::slice::Iter<'a, CourseOffering>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}
