//! Time-conflict detection between course offerings.
//!
//! Two offerings conflict iff they meet on at least one common day and
//! their windows overlap under half-open semantics:
//! `max(a.start, b.start) < min(a.end, b.end)`. Back-to-back sections
//! (`a.end == b.start`) do not conflict.
//!
//! [`ConflictReport`] expands a selection into every unordered pair with
//! its conflict flag, for display next to a timetable.

use serde::{Deserialize, Serialize};

use crate::models::{ConflictEdge, CourseOffering, Selection};

/// Whether two offerings' meetings collide. Symmetric.
#[inline]
pub fn conflicts(a: &CourseOffering, b: &CourseOffering) -> bool {
    a.meeting.overlaps(&b.meeting)
}

/// Whether `course` conflicts with any of `others`.
pub fn conflicts_with_any<'a>(
    course: &CourseOffering,
    others: impl IntoIterator<Item = &'a CourseOffering>,
) -> bool {
    others.into_iter().any(|o| conflicts(o, course))
}

/// Pairwise conflict status of a selection.
///
/// Edges are listed as `(i, j)` with `i < j` over selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// One edge per unordered pair of selected courses.
    pub edges: Vec<ConflictEdge>,
}

impl ConflictReport {
    /// Computes the report for a selection.
    ///
    /// O(n²) in the selection size.
    pub fn of(selection: &Selection) -> Self {
        Self::of_courses(selection.courses())
    }

    /// Computes the report for any ordered slice of distinct courses.
    pub fn of_courses(courses: &[CourseOffering]) -> Self {
        let mut edges = Vec::with_capacity(courses.len() * courses.len().saturating_sub(1) / 2);
        for (i, a) in courses.iter().enumerate() {
            for b in &courses[i + 1..] {
                edges.push(ConflictEdge {
                    first: a.code.clone(),
                    second: b.code.clone(),
                    conflict: conflicts(a, b),
                });
            }
        }
        Self { edges }
    }

    /// Whether any pair conflicts.
    pub fn has_conflicts(&self) -> bool {
        self.edges.iter().any(|e| e.conflict)
    }

    /// Edges flagged as conflicting.
    pub fn conflicting(&self) -> impl Iterator<Item = &ConflictEdge> {
        self.edges.iter().filter(|e| e.conflict)
    }

    /// Looks up the edge for a pair, in either order.
    pub fn edge(&self, a: &str, b: &str) -> Option<&ConflictEdge> {
        self.edges
            .iter()
            .find(|e| (e.first == a && e.second == b) || (e.first == b && e.second == a))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the report has no pairs (fewer than two courses selected).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday::*;

    fn course(code: &str, days: &[crate::models::Weekday], start: u32, end: u32) -> CourseOffering {
        CourseOffering::new(code).with_schedule(days.iter().copied(), start, end)
    }

    #[test]
    fn test_conflict_same_day_overlap() {
        let a = course("A", &[Sun, Tue], 600, 675);
        let b = course("B", &[Tue], 630, 700);
        assert!(conflicts(&a, &b));
        assert!(conflicts(&b, &a));
    }

    #[test]
    fn test_touching_boundary_is_not_conflict() {
        // Tue 10:00-11:15 and Tue 11:15-12:00
        let a = course("A", &[Tue], 600, 675);
        let b = course("B", &[Tue], 675, 720);
        assert!(!conflicts(&a, &b));
        assert!(!conflicts(&b, &a));
    }

    #[test]
    fn test_disjoint_days() {
        let a = course("A", &[Sun, Tue], 600, 675);
        let b = course("B", &[Mon, Wed], 600, 675);
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn test_containment_conflicts() {
        let a = course("A", &[Thu], 600, 720);
        let b = course("B", &[Thu], 630, 660);
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn test_conflicts_with_any() {
        let a = course("A", &[Sun], 600, 675);
        let b = course("B", &[Mon], 600, 675);
        let c = course("C", &[Mon], 650, 700);
        assert!(conflicts_with_any(&c, [&a, &b]));
        assert!(!conflicts_with_any(&c, [&a]));
        assert!(!conflicts_with_any(&c, std::iter::empty()));
    }

    #[test]
    fn test_report_covers_all_pairs() {
        let sel = Selection::from_courses([
            course("A", &[Sun], 600, 675),
            course("B", &[Sun], 660, 720),
            course("C", &[Mon], 600, 675),
        ]);
        let report = ConflictReport::of(&sel);

        assert_eq!(report.len(), 3);
        assert_eq!(report.edges[0].first, "A");
        assert_eq!(report.edges[0].second, "B");
        assert!(report.edges[0].conflict);
        assert_eq!((report.edges[1].first.as_str(), report.edges[1].second.as_str()), ("A", "C"));
        assert_eq!((report.edges[2].first.as_str(), report.edges[2].second.as_str()), ("B", "C"));
        assert!(report.has_conflicts());
        assert_eq!(report.conflicting().count(), 1);
        assert!(report.edge("B", "A").unwrap().conflict);
        assert!(!report.edge("C", "A").unwrap().conflict);
    }

    #[test]
    fn test_report_small_selections() {
        assert!(ConflictReport::of(&Selection::new()).is_empty());
        let one = Selection::from_courses([course("A", &[Sun], 600, 675)]);
        let report = ConflictReport::of(&one);
        assert!(report.is_empty());
        assert!(!report.has_conflicts());
    }
}
