//! Registration configuration.
//!
//! Credit-load band used by auto-fill and load reporting.

use serde::{Deserialize, Serialize};

/// Default lower bound of the target credit band.
pub const DEFAULT_MIN_CREDITS: u32 = 15;
/// Default upper bound of the target credit band.
pub const DEFAULT_MAX_CREDITS: u32 = 18;
/// Default full-time threshold; loads below this are reported as part-time.
pub const DEFAULT_FULL_TIME_CREDITS: u32 = 12;

/// Credit-load settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Lower bound auto-fill aims for (not guaranteed).
    pub min_credits: u32,
    /// Auto-fill stops adding once the total reaches this.
    pub max_credits: u32,
    /// Totals below this are below full-time.
    pub full_time_credits: u32,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            min_credits: DEFAULT_MIN_CREDITS,
            max_credits: DEFAULT_MAX_CREDITS,
            full_time_credits: DEFAULT_FULL_TIME_CREDITS,
        }
    }
}

impl RegistrationConfig {
    /// Creates the default configuration (15-18 credits, full-time at 12).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credit band.
    pub fn with_credit_band(mut self, min_credits: u32, max_credits: u32) -> Self {
        self.min_credits = min_credits;
        self.max_credits = max_credits;
        self
    }

    /// Sets the full-time threshold.
    pub fn with_full_time_credits(mut self, credits: u32) -> Self {
        self.full_time_credits = credits;
        self
    }

    /// Parses a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether `credits` lies within `[min_credits, max_credits]`.
    pub fn within_band(&self, credits: u32) -> bool {
        credits >= self.min_credits && credits <= self.max_credits
    }
}
