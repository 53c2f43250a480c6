//! Pay schedule: when paychecks arrive

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::Frequency;

/// A paycheck cadence anchored at a known pay date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySchedule {
    pub start_date: NaiveDate,
    pub frequency: Frequency,
}

impl PaySchedule {
    pub fn new(start_date: NaiveDate, frequency: Frequency) -> Self {
        Self {
            start_date,
            frequency,
        }
    }

    pub fn bi_weekly(start_date: NaiveDate) -> Self {
        Self::new(start_date, Frequency::BiWeekly)
    }

    /// Parse a `YYYY-MM-DD` start date and a frequency label
    pub fn parse(start_date: &str, frequency: &str) -> Result<Self, ScheduleParseError> {
        let date = NaiveDate::parse_from_str(start_date.trim(), "%Y-%m-%d")
            .map_err(|_| ScheduleParseError::InvalidDate(start_date.to_string()))?;
        Ok(Self::new(date, Frequency::parse(frequency)))
    }

    /// Days between paychecks: 14 for bi-weekly, otherwise 30
    pub fn days_between(&self) -> i64 {
        match self.frequency {
            Frequency::BiWeekly => 14,
            _ => 30,
        }
    }
}

impl fmt::Display for PaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} starting {}",
            self.frequency.description(),
            self.start_date.format("%Y-%m-%d")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleParseError {
    InvalidDate(String),
}

impl fmt::Display for ScheduleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "Invalid date '{}'. Use YYYY-MM-DD", s),
        }
    }
}

impl std::error::Error for ScheduleParseError {}
