//! Credit-load metrics and weekly timetable for a selection.
//!
//! # Load Status
//!
//! | Status | Condition |
//! |--------|-----------|
//! | BelowFullTime | total < full_time_credits |
//! | Normal | full_time_credits ≤ total ≤ max_credits |
//! | Overload | total > max_credits |

use serde::{Deserialize, Serialize};

use crate::config::RegistrationConfig;
use crate::models::{CourseOffering, Selection, Weekday};

/// Classification of a credit total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    /// Fewer credits than a full-time load.
    BelowFullTime,
    /// Full-time, at most the maximum.
    Normal,
    /// Above the maximum.
    Overload,
}

impl LoadStatus {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            LoadStatus::BelowFullTime => "Below full-time",
            LoadStatus::Normal => "Load OK",
            LoadStatus::Overload => "Overload",
        }
    }
}

/// Credit totals of a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditLoad {
    /// Sum of credits.
    pub total_credits: u32,
    /// Status against the configured thresholds.
    pub status: LoadStatus,
    /// Whether the total lies in the target band.
    pub within_band: bool,
    /// Progress toward `min_credits`, capped at 1.0.
    pub progress: f64,
}

impl CreditLoad {
    /// Computes the load of a selection.
    pub fn of(selection: &Selection, config: &RegistrationConfig) -> Self {
        Self::from_total(selection.total_credits(), config)
    }

    /// Computes the load for a raw credit total.
    pub fn from_total(total_credits: u32, config: &RegistrationConfig) -> Self {
        let status = if total_credits < config.full_time_credits {
            LoadStatus::BelowFullTime
        } else if total_credits <= config.max_credits {
            LoadStatus::Normal
        } else {
            LoadStatus::Overload
        };

        let progress = if config.min_credits == 0 {
            1.0
        } else {
            (total_credits as f64 / config.min_credits as f64).min(1.0)
        };

        Self {
            total_credits,
            status,
            within_band: config.within_band(total_credits),
            progress,
        }
    }
}

/// Selected courses grouped by weekday, each day sorted by start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    days: Vec<(Weekday, Vec<CourseOffering>)>,
}

impl Timetable {
    /// Builds the timetable. Courses starting at the same time keep
    /// selection order.
    pub fn of(selection: &Selection) -> Self {
        let days = Weekday::ALL
            .into_iter()
            .map(|day| {
                let mut courses: Vec<CourseOffering> = selection
                    .iter()
                    .filter(|c| c.meeting.meets_on(day))
                    .cloned()
                    .collect();
                courses.sort_by_key(|c| c.start_min());
                (day, courses)
            })
            .collect();
        Self { days }
    }

    /// Courses meeting on a day.
    pub fn on(&self, day: Weekday) -> &[CourseOffering] {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, courses)| courses.as_slice())
            .unwrap_or(&[])
    }

    /// Iterates `(day, courses)` Sun → Thu, including empty days.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[CourseOffering])> {
        self.days.iter().map(|(d, c)| (*d, c.as_slice()))
    }

    /// Days with no class.
    pub fn free_days(&self) -> Vec<Weekday> {
        self.days
            .iter()
            .filter(|(_, c)| c.is_empty())
            .map(|(d, _)| *d)
            .collect()
    }

    /// Weekly contact minutes on a day.
    pub fn minutes_on(&self, day: Weekday) -> u32 {
        self.on(day).iter().map(|c| c.meeting.duration_min()).sum()
    }
}
