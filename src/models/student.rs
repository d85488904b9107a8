//! Student record model.
//!
//! Read-only input to the registration core: what the student has passed,
//! what they are taking now, and the order in which their degree plan wants
//! the remaining courses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student's academic standing and degree-plan wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRecord {
    /// Student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Degree program.
    pub program: String,
    /// Codes of completed courses.
    pub completed: BTreeSet<String>,
    /// Codes of courses currently in progress.
    pub in_progress: BTreeSet<String>,
    /// Degree-plan order of wanted courses. Earlier = higher priority.
    /// May name courses absent from the catalog.
    pub priority: Vec<String>,
}

impl StudentRecord {
    /// Creates an empty record with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the program.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Marks a course as completed.
    pub fn with_completed(mut self, code: impl Into<String>) -> Self {
        self.completed.insert(code.into());
        self
    }

    /// Marks a course as in progress.
    pub fn with_in_progress(mut self, code: impl Into<String>) -> Self {
        self.in_progress.insert(code.into());
        self
    }

    /// Replaces the degree-plan priority list.
    pub fn with_priority<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the course counts toward prerequisites: completed or in
    /// progress.
    pub fn has_covered(&self, code: &str) -> bool {
        self.completed.contains(code) || self.in_progress.contains(code)
    }

    /// Whether every code in `prerequisites` is covered.
    pub fn satisfies<'a>(&self, prerequisites: impl IntoIterator<Item = &'a String>) -> bool {
        prerequisites.into_iter().all(|p| self.has_covered(p))
    }
}
