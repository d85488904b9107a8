//! Course offering model.
//!
//! A course offering is one schedulable section in the catalog: a unique
//! code, a credit value, a weekly meeting pattern, a room, the seats still
//! open, and the prerequisite codes a student must have covered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{MeetingTime, ModelError, Weekday};

/// A course section offered in the catalog.
///
/// The `code` is the identity of the offering and never changes after the
/// catalog is built. `seats_left` is the only field advisors mutate, and
/// only through [`crate::store::CourseCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOffering {
    /// Unique course code (e.g. `"DB200"`).
    pub code: String,
    /// Human-readable title.
    pub title: String,
    /// Credit hours (positive).
    pub credits: u32,
    /// Weekly meeting pattern.
    pub meeting: MeetingTime,
    /// Room label.
    pub room: String,
    /// Open seats.
    pub seats_left: u32,
    /// Codes of prerequisite courses. Empty = no prerequisites.
    pub prerequisites: BTreeSet<String>,
}

impl CourseOffering {
    /// Creates an offering with the given code and defaults elsewhere.
    ///
    /// Defaults: 3 credits, no meeting days, empty window at midnight,
    /// zero seats, no prerequisites.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: String::new(),
            credits: 3,
            meeting: MeetingTime::new([], 0, 0),
            room: String::new(),
            seats_left: 0,
            prerequisites: BTreeSet::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets the meeting pattern.
    pub fn with_meeting(mut self, meeting: MeetingTime) -> Self {
        self.meeting = meeting;
        self
    }

    /// Sets days and window (minutes since midnight) in one call.
    pub fn with_schedule(
        mut self,
        days: impl IntoIterator<Item = Weekday>,
        start_min: u32,
        end_min: u32,
    ) -> Self {
        self.meeting = MeetingTime::new(days, start_min, end_min);
        self
    }

    /// Parses days and `"HH:MM"` bounds, failing on malformed input.
    pub fn try_with_schedule(
        mut self,
        days: &[&str],
        start: &str,
        end: &str,
    ) -> Result<Self, ModelError> {
        self.meeting = MeetingTime::parse(days, start, end)?;
        Ok(self)
    }

    /// Sets the room label.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Sets the open seat count.
    pub fn with_seats(mut self, seats_left: u32) -> Self {
        self.seats_left = seats_left;
        self
    }

    /// Adds a prerequisite code.
    pub fn with_prerequisite(mut self, code: impl Into<String>) -> Self {
        self.prerequisites.insert(code.into());
        self
    }

    /// Whether any seat is open.
    #[inline]
    pub fn has_seats(&self) -> bool {
        self.seats_left > 0
    }

    /// Whether the offering lists any prerequisite.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Window start (minutes since midnight).
    #[inline]
    pub fn start_min(&self) -> u32 {
        self.meeting.start_min
    }

    /// Window end (minutes since midnight).
    #[inline]
    pub fn end_min(&self) -> u32 {
        self.meeting.end_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = CourseOffering::new("DB200")
            .with_title("Advanced Database")
            .with_credits(3)
            .with_schedule([Weekday::Sun, Weekday::Tue], 600, 675)
            .with_room("B-214")
            .with_seats(6)
            .with_prerequisite("CS101");

        assert_eq!(c.code, "DB200");
        assert_eq!(c.title, "Advanced Database");
        assert_eq!(c.credits, 3);
        assert_eq!(c.room, "B-214");
        assert_eq!(c.seats_left, 6);
        assert_eq!(c.start_min(), 600);
        assert_eq!(c.end_min(), 675);
        assert!(c.has_seats());
        assert!(c.has_prerequisites());
        assert!(c.prerequisites.contains("CS101"));
    }

    #[test]
    fn test_try_with_schedule() {
        let c = CourseOffering::new("LAB201")
            .try_with_schedule(&["Thu"], "10:00", "12:00")
            .unwrap();
        assert!(c.meeting.meets_on(Weekday::Thu));
        assert_eq!(c.meeting.duration_min(), 120);

        let bad = CourseOffering::new("X").try_with_schedule(&["Fri"], "10:00", "12:00");
        assert!(bad.is_err());
    }

    #[test]
    fn test_full_course() {
        let c = CourseOffering::new("OOP200").with_seats(0);
        assert!(!c.has_seats());
        assert!(!c.has_prerequisites());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let c = CourseOffering::new("ECON201").with_seats(9);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"seatsLeft\":9"));
        let back: CourseOffering = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_serde_meeting_uses_camel_case() {
        let c = CourseOffering::new("DB200").with_schedule([Weekday::Sun], 600, 675);
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["meeting"]["startMin"], 600);
        assert_eq!(value["meeting"]["endMin"], 675);
        assert!(value["meeting"].get("start_min").is_none());
    }
}
