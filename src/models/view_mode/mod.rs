//! Timeline view modes.
//!
//! A view mode fixes two things at once: how many columns the board shows and
//! how many calendar days one 100 px column stands for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of one rendered column, shared with whatever draws the board.
pub const COLUMN_WIDTH_PX: f64 = 100.0;

/// Average month length used to scale month columns. Approximate on purpose.
pub const AVERAGE_DAYS_PER_MONTH: f64 = 30.44;

/// Timeline granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    #[serde(alias = "day")]
    Day,
    #[serde(alias = "week")]
    Week,
    #[serde(alias = "month")]
    Month,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Day, ViewMode::Week, ViewMode::Month];

    /// Number of column markers the board renders in this mode.
    pub fn column_count(self) -> usize {
        match self {
            ViewMode::Day => 20,
            ViewMode::Week => 12,
            ViewMode::Month => 12,
        }
    }

    /// Calendar days covered by one column.
    pub fn days_per_column(self) -> f64 {
        match self {
            ViewMode::Day => 1.0,
            ViewMode::Week => 7.0,
            ViewMode::Month => AVERAGE_DAYS_PER_MONTH,
        }
    }

    /// Horizontal pixels per calendar day.
    pub fn pixels_per_day(self) -> f64 {
        COLUMN_WIDTH_PX / self.days_per_column()
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view mode '{0}' (expected Day, Week or Month)")]
pub struct ParseViewModeError(pub String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            _ => Err(ParseViewModeError(s.to_string())),
        }
    }
}
