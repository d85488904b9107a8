//! Composable eligibility filter.

use std::sync::Arc;

use super::rules::{NoConflict, NotSelected, PrerequisitesMet, SeatsAvailable};
use super::{EligibilityContext, EligibilityRule};
use crate::models::{CourseOffering, Selection, StudentRecord};

/// Admits a course iff every configured rule admits it.
///
/// Holds no state between calls: re-run it whenever the catalog, the
/// student, or the selection changes.
#[derive(Clone)]
pub struct EligibilityFilter {
    rules: Vec<Arc<dyn EligibilityRule>>,
}

impl EligibilityFilter {
    /// Creates a filter with no rules (admits everything).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The recommendation filter: prerequisites, seats, not selected,
    /// no conflict.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(PrerequisitesMet)
            .with_rule(SeatsAvailable)
            .with_rule(NotSelected)
            .with_rule(NoConflict)
    }

    /// Adds a rule.
    pub fn with_rule<R: EligibilityRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Number of rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Whether a single course passes every rule.
    pub fn is_eligible(&self, course: &CourseOffering, context: &EligibilityContext<'_>) -> bool {
        self.rules.iter().all(|r| r.admits(course, context))
    }

    /// Eligible courses, in catalog order.
    pub fn eligible(
        &self,
        catalog: &[CourseOffering],
        student: &StudentRecord,
        selection: &Selection,
    ) -> Vec<CourseOffering> {
        let context = EligibilityContext::new(student, selection);
        catalog
            .iter()
            .filter(|c| self.is_eligible(c, &context))
            .cloned()
            .collect()
    }

    /// Names of the rules a course fails. Empty = eligible.
    pub fn explain(
        &self,
        course: &CourseOffering,
        student: &StudentRecord,
        selection: &Selection,
    ) -> Vec<&'static str> {
        let context = EligibilityContext::new(student, selection);
        self.rules
            .iter()
            .filter(|r| !r.admits(course, &context))
            .map(|r| r.name())
            .collect()
    }
}

impl Default for EligibilityFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EligibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EligibilityFilter")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Eligible candidates under the standard filter, in catalog order.
pub fn eligible(
    catalog: &[CourseOffering],
    student: &StudentRecord,
    selection: &Selection,
) -> Vec<CourseOffering> {
    EligibilityFilter::standard().eligible(catalog, student, selection)
}
