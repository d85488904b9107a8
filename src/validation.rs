//! Catalog integrity checks.
//!
//! Checks structural integrity of a catalog before it is served to
//! students. Detects:
//! - Duplicate course codes
//! - Empty or inverted meeting windows
//! - Courses with no meeting days
//! - Zero-credit courses
//! - Courses that require themselves
//! - Circular prerequisite chains among catalog courses
//!
//! Prerequisites that are not in the catalog are not errors: they are
//! satisfied by a student's transcript.

use crate::models::{format_hhmm, CourseOffering, MINUTES_PER_DAY};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two offerings share the same code.
    DuplicateCode,
    /// Meeting window is empty, inverted, or runs past midnight.
    InvalidTimeRange,
    /// Offering meets on no day.
    NoMeetingDays,
    /// Offering carries zero credits.
    ZeroCredits,
    /// Offering lists itself as a prerequisite.
    SelfPrerequisite,
    /// Prerequisite graph contains a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog.
///
/// Checks:
/// 1. No duplicate codes
/// 2. `start < end` and end within the day
/// 3. At least one meeting day
/// 4. Positive credits
/// 5. No self-prerequisites
/// 6. No circular prerequisite chains
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[CourseOffering]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for c in courses {
        if !codes.insert(c.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", c.code),
            ));
        }

        if c.start_min() >= c.end_min() || c.end_min() > MINUTES_PER_DAY {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Course '{}' has invalid window {}-{}",
                    c.code,
                    format_hhmm(c.start_min()),
                    format_hhmm(c.end_min())
                ),
            ));
        }

        if c.meeting.days.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoMeetingDays,
                format!("Course '{}' meets on no day", c.code),
            ));
        }

        if c.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCredits,
                format!("Course '{}' has zero credits", c.code),
            ));
        }

        if c.prerequisites.contains(&c.code) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfPrerequisite,
                format!("Course '{}' lists itself as a prerequisite", c.code),
            ));
        }
    }

    if let Some(cycle_err) = detect_cycles(courses) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// Edges run prerequisite → dependent, restricted to catalog codes.
/// Self-loops are reported separately and skipped here.
fn detect_cycles(courses: &[CourseOffering]) -> Option<ValidationError> {
    let known: HashSet<&str> = courses.iter().map(|c| c.code.as_str()).collect();
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();

    for c in courses {
        for pre in &c.prerequisites {
            if pre != &c.code && known.contains(pre.as_str()) {
                adj.entry(pre.as_str()).or_default().push(c.code.as_str());
            }
        }
    }

    // Catalog order keeps the reported course stable across runs.
    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for c in courses {
        let node = c.code.as_str();
        if !visited.contains(node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite chain involving course '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
