//! Priority-driven greedy auto-fill.
//!
//! # Algorithm
//!
//! 1. Rank each candidate by its first position in the degree-plan
//!    priority list; codes not in the list rank after every listed one.
//! 2. Sort by (rank, more seats first, earlier start, input order).
//! 3. Start from a copy of the current selection.
//! 4. Walk the sorted candidates once. Stop as soon as the running credit
//!    total is at or above `max_credits`; otherwise add a candidate iff its
//!    code is new and it conflicts with nothing already chosen.
//!
//! No backtracking. A pass that stalls below `min_credits` is returned
//! as-is and flagged through [`AutoFillOutcome::reached_minimum`].
//!
//! # Complexity
//! O(n log n + n * k) where n = candidates, k = final selection size.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::config::RegistrationConfig;
use crate::conflict::conflicts_with_any;
use crate::eligibility::EligibilityFilter;
use crate::models::{CourseOffering, Selection, StudentRecord};

/// Rank given to candidates absent from the priority list.
pub const UNRANKED: usize = usize::MAX;

/// Result of an auto-fill pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFillOutcome {
    /// The resulting selection (starting selection + additions).
    pub selection: Selection,
    /// Codes added by this pass, in the order they were added.
    pub added: Vec<String>,
    /// Total credits of `selection`.
    pub total_credits: u32,
    /// Whether `total_credits >= min_credits`.
    pub reached_minimum: bool,
}

/// Greedy auto-fill scheduler.
///
/// # Example
///
/// ```
/// use u_enroll::fixtures;
/// use u_enroll::models::Selection;
/// use u_enroll::scheduler::ScheduleBuilder;
///
/// let catalog = fixtures::sample_catalog();
/// let student = fixtures::sample_student();
///
/// let outcome = ScheduleBuilder::new().auto_fill(&catalog, &student, &Selection::new());
/// assert!(outcome.total_credits <= 18 + 3);
/// assert_eq!(outcome.selection.codes()[0], "DB200");
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    config: RegistrationConfig,
    filter: EligibilityFilter,
}

impl ScheduleBuilder {
    /// Creates a builder with the default 15-18 credit band and the
    /// standard eligibility filter.
    pub fn new() -> Self {
        Self {
            config: RegistrationConfig::default(),
            filter: EligibilityFilter::standard(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: RegistrationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the credit band.
    pub fn with_credit_band(mut self, min_credits: u32, max_credits: u32) -> Self {
        self.config = self.config.with_credit_band(min_credits, max_credits);
        self
    }

    /// Sets the eligibility filter used by [`ScheduleBuilder::auto_fill`].
    pub fn with_filter(mut self, filter: EligibilityFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Returns candidate indices in auto-fill order.
    pub fn sort_indices(&self, candidates: &[CourseOffering], priority: &[String]) -> Vec<usize> {
        let mut rank: HashMap<&str, usize> = HashMap::with_capacity(priority.len());
        for (i, code) in priority.iter().enumerate() {
            rank.entry(code.as_str()).or_insert(i);
        }

        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by_key(|&i| {
            let c = &candidates[i];
            (
                rank.get(c.code.as_str()).copied().unwrap_or(UNRANKED),
                Reverse(c.seats_left),
                c.start_min(),
                i,
            )
        });
        indices
    }

    /// Runs the greedy pass and returns the new selection.
    ///
    /// `current` is not modified.
    pub fn build(
        &self,
        candidates: &[CourseOffering],
        priority: &[String],
        current: &Selection,
    ) -> Selection {
        self.build_outcome(candidates, priority, current).selection
    }

    /// Runs the greedy pass and reports what it did.
    pub fn build_outcome(
        &self,
        candidates: &[CourseOffering],
        priority: &[String],
        current: &Selection,
    ) -> AutoFillOutcome {
        let mut plan = current.clone();
        let mut total = plan.total_credits();
        let mut added = Vec::new();

        for idx in self.sort_indices(candidates, priority) {
            if total >= self.config.max_credits {
                tracing::debug!(
                    total,
                    max = self.config.max_credits,
                    "auto-fill reached credit ceiling"
                );
                break;
            }

            let course = &candidates[idx];
            if plan.contains(&course.code) || conflicts_with_any(course, &plan) {
                tracing::debug!(code = %course.code, "auto-fill skipped candidate");
                continue;
            }

            plan.add(course.clone());
            total = total.saturating_add(course.credits);
            added.push(course.code.clone());
        }

        let reached_minimum = total >= self.config.min_credits;
        if !reached_minimum {
            tracing::debug!(
                total,
                min = self.config.min_credits,
                "auto-fill stalled below credit minimum"
            );
        }

        AutoFillOutcome {
            selection: plan,
            added,
            total_credits: total,
            reached_minimum,
        }
    }

    /// Filters the catalog for the student, then fills from the result
    /// using the student's degree-plan priority.
    pub fn auto_fill(
        &self,
        catalog: &[CourseOffering],
        student: &StudentRecord,
        current: &Selection,
    ) -> AutoFillOutcome {
        let candidates = self.filter.eligible(catalog, student, current);
        self.build_outcome(&candidates, &student.priority, current)
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot greedy pass with an explicit credit band.
pub fn build(
    candidates: &[CourseOffering],
    priority: &[String],
    current: &Selection,
    min_credits: u32,
    max_credits: u32,
) -> Selection {
    ScheduleBuilder::new()
        .with_credit_band(min_credits, max_credits)
        .build(candidates, priority, current)
}
