//! User settings for Budgie
//!
//! Rounding preference, pay schedule and display preferences, persisted as
//! JSON next to the default plan file.

use serde::{Deserialize, Serialize};

use super::paths::BudgiePaths;
use crate::engine::Rounding;
use crate::error::BudgieError;
use crate::models::{Money, PaySchedule};
use crate::storage::{read_json, write_json_atomic};

/// User settings for Budgie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Round allocations up to a multiple of this amount; zero disables
    #[serde(default)]
    pub rounding_option: Money,

    /// When paychecks arrive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_schedule: Option<PaySchedule>,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default log filter when neither BUDGIE_LOG nor --verbose is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            rounding_option: Money::zero(),
            pay_schedule: None,
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn rounding(&self) -> Rounding {
        Rounding::from(self.rounding_option)
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Defaults are not written; the caller decides when to persist.
    pub fn load_or_create(paths: &BudgiePaths) -> Result<Self, BudgieError> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        read_json(&settings_path).map_err(|e| {
            BudgieError::Config(format!(
                "Failed to load settings from {}: {}",
                settings_path.display(),
                e
            ))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgiePaths) -> Result<(), BudgieError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    pub fn validate(&self) -> Result<(), BudgieError> {
        if self.rounding_option.is_negative() {
            return Err(BudgieError::Validation(
                "Rounding option cannot be negative".into(),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(BudgieError::Validation("Date format cannot be empty".into()));
        }
        Ok(())
    }
}
