//! Weekly meeting pattern model.
//!
//! A course section meets on a set of weekdays, always in the same
//! time-of-day window. Conflict detection between two sections reduces to
//! "shared day AND overlapping window".
//!
//! # Time Model
//! Times are minutes since midnight. Windows are half-open `[start, end)`:
//! a section ending at 11:15 does not collide with one starting at 11:15.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::ModelError;

/// Minutes in a day; exclusive upper bound for a time of day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Teaching days of the week.
///
/// Declaration order is calendar order, so `BTreeSet<Weekday>` iterates
/// Sun → Thu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
}

impl Weekday {
    /// All teaching days in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
    ];

    /// Three-letter token (`"Sun"`, `"Mon"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sun => "Sun",
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ModelError::UnknownWeekday(token.to_string()))
    }
}

/// Parses `"HH:MM"` into minutes since midnight.
///
/// Hours must be 0-23 and minutes 0-59. A single-digit hour (`"8:00"`)
/// is accepted.
pub fn parse_hhmm(s: &str) -> Result<u32, ModelError> {
    let invalid = || ModelError::InvalidTime(s.to_string());
    let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
    if h.is_empty() || h.len() > 2 || m.len() != 2 {
        return Err(invalid());
    }
    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let minutes: u32 = m.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded `"HH:MM"`.
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A weekly meeting pattern: a set of days and a `[start, end)` window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTime {
    /// Days the section meets.
    pub days: BTreeSet<Weekday>,
    /// Window start (minutes since midnight, inclusive).
    pub start_min: u32,
    /// Window end (minutes since midnight, exclusive).
    pub end_min: u32,
}

impl MeetingTime {
    /// Creates a meeting pattern without validating the window.
    ///
    /// Use [`MeetingTime::try_new`] or [`MeetingTime::parse`] for
    /// user-supplied data.
    pub fn new(days: impl IntoIterator<Item = Weekday>, start_min: u32, end_min: u32) -> Self {
        Self {
            days: days.into_iter().collect(),
            start_min,
            end_min,
        }
    }

    /// Creates a meeting pattern, rejecting empty or inverted windows.
    pub fn try_new(
        days: impl IntoIterator<Item = Weekday>,
        start_min: u32,
        end_min: u32,
    ) -> Result<Self, ModelError> {
        if start_min >= end_min || end_min > MINUTES_PER_DAY {
            return Err(ModelError::InvalidWindow {
                start: format_hhmm(start_min),
                end: format_hhmm(end_min),
            });
        }
        Ok(Self::new(days, start_min, end_min))
    }

    /// Parses day tokens and `"HH:MM"` bounds, e.g.
    /// `MeetingTime::parse(&["Sun", "Tue"], "10:00", "11:15")`.
    pub fn parse(days: &[&str], start: &str, end: &str) -> Result<Self, ModelError> {
        let days = days
            .iter()
            .map(|d| d.parse::<Weekday>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(days, parse_hhmm(start)?, parse_hhmm(end)?)
    }

    /// Duration of one meeting (minutes).
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether the pattern includes the given day.
    #[inline]
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Whether the two patterns share at least one day.
    pub fn shares_day(&self, other: &Self) -> bool {
        self.days.iter().any(|d| other.days.contains(d))
    }

    /// Whether the time-of-day windows overlap (half-open).
    #[inline]
    pub fn window_overlaps(&self, other: &Self) -> bool {
        self.start_min.max(other.start_min) < self.end_min.min(other.end_min)
    }

    /// Whether two meeting patterns collide: a shared day and an
    /// overlapping window. Symmetric.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.shares_day(other) && self.window_overlaps(other)
    }

    /// `"Sun/Tue 10:00-11:15"`.
    pub fn label(&self) -> String {
        let days: Vec<&str> = self.days.iter().map(Weekday::as_str).collect();
        format!(
            "{} {}-{}",
            days.join("/"),
            format_hhmm(self.start_min),
            format_hhmm(self.end_min)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("00:00").unwrap(), 0);
        assert_eq!(parse_hhmm("10:00").unwrap(), 600);
        assert_eq!(parse_hhmm("13:45").unwrap(), 825);
        assert_eq!(parse_hhmm("8:30").unwrap(), 510);
        assert_eq!(parse_hhmm("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_parse_hhmm_rejects_garbage() {
        assert!(parse_hhmm("").is_err());
        assert!(parse_hhmm("1000").is_err());
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("10:60").is_err());
        assert!(parse_hhmm("10:5").is_err());
        assert!(parse_hhmm("ab:cd").is_err());
    }

    #[test]
    fn test_format_hhmm() {
        assert_eq!(format_hhmm(0), "00:00");
        assert_eq!(format_hhmm(510), "08:30");
        assert_eq!(format_hhmm(825), "13:45");
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Sun".parse::<Weekday>().unwrap(), Weekday::Sun);
        assert_eq!("tue".parse::<Weekday>().unwrap(), Weekday::Tue);
        assert_eq!(" THU ".parse::<Weekday>().unwrap(), Weekday::Thu);
        assert!(matches!(
            "Fri".parse::<Weekday>(),
            Err(ModelError::UnknownWeekday(_))
        ));
    }

    #[test]
    fn test_try_new_rejects_inverted_window() {
        assert!(MeetingTime::try_new([Weekday::Mon], 600, 600).is_err());
        assert!(MeetingTime::try_new([Weekday::Mon], 700, 600).is_err());
        assert!(MeetingTime::try_new([Weekday::Mon], 600, 675).is_ok());
    }

    #[test]
    fn test_parse_meeting() {
        let m = MeetingTime::parse(&["Sun", "Tue"], "10:00", "11:15").unwrap();
        assert!(m.meets_on(Weekday::Sun));
        assert!(m.meets_on(Weekday::Tue));
        assert!(!m.meets_on(Weekday::Mon));
        assert_eq!(m.duration_min(), 75);
        assert_eq!(m.label(), "Sun/Tue 10:00-11:15");
    }

    #[test]
    fn test_overlap_requires_shared_day() {
        let a = MeetingTime::new([Weekday::Sun, Weekday::Tue], 600, 675);
        let b = MeetingTime::new([Weekday::Mon, Weekday::Wed], 600, 675);
        assert!(a.window_overlaps(&b));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let a = MeetingTime::new([Weekday::Tue], 600, 675);
        let b = MeetingTime::new([Weekday::Tue], 675, 720);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = MeetingTime::new([Weekday::Thu], 600, 720);
        let b = MeetingTime::new([Weekday::Thu], 660, 780);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }
}
