//! Owned course catalog with advisor seat management.
//!
//! The catalog is the only place offerings are mutated, and the only
//! mutation is the seat count. Callers read snapshots through
//! [`CourseCatalog::courses`] and re-run the eligibility filter after
//! every update.

use serde::{Deserialize, Serialize};

use crate::models::{CourseOffering, Selection};
use crate::validation::{validate_catalog, ValidationError, ValidationResult};

/// Ordered catalog of course offerings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCatalog {
    courses: Vec<CourseOffering>,
}

impl CourseCatalog {
    /// Wraps offerings without validation.
    pub fn new(courses: Vec<CourseOffering>) -> Self {
        Self { courses }
    }

    /// Wraps offerings after checking catalog integrity.
    pub fn try_new(courses: Vec<CourseOffering>) -> Result<Self, Vec<ValidationError>> {
        validate_catalog(&courses)?;
        Ok(Self::new(courses))
    }

    /// Re-checks integrity of the current offerings.
    pub fn validate(&self) -> ValidationResult {
        validate_catalog(&self.courses)
    }

    /// All offerings in catalog order.
    pub fn courses(&self) -> &[CourseOffering] {
        &self.courses
    }

    /// Catalog codes in order.
    pub fn codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }

    /// Finds an offering by code.
    pub fn get(&self, code: &str) -> Option<&CourseOffering> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Number of offerings.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sets the seat count, clamping negatives to zero.
    ///
    /// Returns `false` if no offering has this code.
    pub fn set_seats(&mut self, code: &str, value: i64) -> bool {
        match self.courses.iter_mut().find(|c| c.code == code) {
            Some(course) => {
                let seats = clamp_seats(value);
                tracing::debug!(code, seats, "seat count set");
                course.seats_left = seats;
                true
            }
            None => false,
        }
    }

    /// Adds `delta` to the seat count, never going below zero.
    ///
    /// Returns `false` if no offering has this code.
    pub fn adjust_seats(&mut self, code: &str, delta: i64) -> bool {
        let current = match self.get(code) {
            Some(course) => i64::from(course.seats_left),
            None => return false,
        };
        self.set_seats(code, current.saturating_add(delta))
    }

    /// Sets the seat count from free-form input.
    ///
    /// Decimal input is truncated toward zero; non-numeric input sets
    /// zero seats.
    pub fn set_seats_from_input(&mut self, code: &str, input: &str) -> bool {
        self.set_seats(code, parse_seats(input).unwrap_or(0))
    }

    /// Resolves codes to a selection in the given order, dropping codes not
    /// in the catalog and repeated codes.
    pub fn resolve<I, S>(&self, codes: I) -> Selection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Selection::from_courses(
            codes
                .into_iter()
                .filter_map(|code| self.get(code.as_ref()).cloned()),
        )
    }

    /// Consumes the catalog, returning its offerings.
    pub fn into_courses(self) -> Vec<CourseOffering> {
        self.courses
    }
}

impl From<Vec<CourseOffering>> for CourseCatalog {
    fn from(courses: Vec<CourseOffering>) -> Self {
        Self::new(courses)
    }
}

impl AsRef<[CourseOffering]> for CourseCatalog {
    fn as_ref(&self) -> &[CourseOffering] {
        &self.courses
    }
}

/// Parses a seat count from text, truncating decimals toward zero.
pub(crate) fn parse_seats(input: &str) -> Option<i64> {
    let input = input.trim();
    input.parse::<i64>().ok().or_else(|| {
        input
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

/// Clamps a signed seat value into `0..=u32::MAX`.
pub(crate) fn clamp_seats(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
