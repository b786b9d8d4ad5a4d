// Settings module
// Board configuration as read from board.toml

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::view_mode::ViewMode;

pub const MIN_CHARS_PER_COLUMN: usize = 3;
pub const MAX_CHARS_PER_COLUMN: usize = 24;

/// User-facing board configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// View mode the board opens in
    pub default_view: ViewMode,
    /// Anchor date; today when absent
    pub anchor_date: Option<NaiveDate>,
    /// Initial work-center search term
    pub search: Option<String>,
    /// JSON file holding the board; platform data dir when absent
    pub data_file: Option<PathBuf>,
    /// Text width of one column in the terminal renderer
    pub chars_per_column: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Day,
            anchor_date: None,
            search: None,
            data_file: None,
            chars_per_column: 6,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(MIN_CHARS_PER_COLUMN..=MAX_CHARS_PER_COLUMN).contains(&self.chars_per_column) {
            return Err(ConfigValidationError::ColumnWidthOutOfRange(self.chars_per_column));
        }
        if let Some(path) = &self.data_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigValidationError::EmptyDataFile);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error(
        "chars_per_column must be between {min} and {max}, got {0}",
        min = MIN_CHARS_PER_COLUMN,
        max = MAX_CHARS_PER_COLUMN
    )]
    ColumnWidthOutOfRange(usize),
    #[error("data_file cannot be empty")]
    EmptyDataFile,
}
