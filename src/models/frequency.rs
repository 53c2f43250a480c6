//! Recurrence frequencies and the weeks-per-year lookup table
//!
//! Every expense recurs at some [`Frequency`]. The allocation engine turns a
//! frequency into an annual occurrence count through a [`FrequencyTable`],
//! which callers own and may customize.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often an expense comes due
///
/// Unrecognized values read from a plan file are kept as [`Frequency::Other`]
/// so that they can round-trip and contribute nothing to allocations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Every3Weeks,
    Monthly,
    Every6Weeks,
    Every7Weeks,
    Every8Weeks,
    Quarterly,
    Annually,
    PerPaycheck,
    Other(String),
}

impl Frequency {
    /// All frequencies with a standard table entry, in table order
    pub const KNOWN: [Frequency; 10] = [
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Every3Weeks,
        Frequency::Monthly,
        Frequency::Every6Weeks,
        Frequency::Every7Weeks,
        Frequency::Every8Weeks,
        Frequency::Quarterly,
        Frequency::Annually,
        Frequency::PerPaycheck,
    ];

    /// Parse a stored frequency value
    ///
    /// Only the exact kebab-case values from [`Frequency::as_str`] are
    /// recognized. Anything else, including other spellings of a known
    /// frequency, becomes [`Frequency::Other`] and allocates nothing.
    pub fn parse(s: &str) -> Self {
        match s {
            "weekly" => Self::Weekly,
            "bi-weekly" => Self::BiWeekly,
            "every-3-weeks" => Self::Every3Weeks,
            "monthly" => Self::Monthly,
            "every-6-weeks" => Self::Every6Weeks,
            "every-7-weeks" => Self::Every7Weeks,
            "every-8-weeks" => Self::Every8Weeks,
            "quarterly" => Self::Quarterly,
            "annually" => Self::Annually,
            "per-paycheck" => Self::PerPaycheck,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical kebab-case value stored in plan files
    pub fn as_str(&self) -> &str {
        match self {
            Self::Weekly => "weekly",
            Self::BiWeekly => "bi-weekly",
            Self::Every3Weeks => "every-3-weeks",
            Self::Monthly => "monthly",
            Self::Every6Weeks => "every-6-weeks",
            Self::Every7Weeks => "every-7-weeks",
            Self::Every8Weeks => "every-8-weeks",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::PerPaycheck => "per-paycheck",
            Self::Other(value) => value,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Weekly => "Weekly".to_string(),
            Self::BiWeekly => "Bi-weekly".to_string(),
            Self::Every3Weeks => "Every 3 weeks".to_string(),
            Self::Monthly => "Monthly".to_string(),
            Self::Every6Weeks => "Every 6 weeks".to_string(),
            Self::Every7Weeks => "Every 7 weeks".to_string(),
            Self::Every8Weeks => "Every 8 weeks".to_string(),
            Self::Quarterly => "Quarterly".to_string(),
            Self::Annually => "Annually".to_string(),
            Self::PerPaycheck => "Per paycheck".to_string(),
            Self::Other(value) => format!("Unknown ({})", value),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the frequency lookup table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyOption {
    pub value: Frequency,
    pub label: String,
    pub weeks_per_year: f64,
}

impl FrequencyOption {
    pub fn new(value: Frequency, weeks_per_year: f64) -> Self {
        Self {
            label: value.description(),
            value,
            weeks_per_year,
        }
    }

    /// Occurrences per year in hundredths, the precision the table is kept at
    pub fn weeks_per_year_hundredths(&self) -> i64 {
        (self.weeks_per_year * 100.0).round() as i64
    }
}

/// The frequency lookup table used to annualize expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable(Vec<FrequencyOption>);

impl FrequencyTable {
    pub fn new(options: Vec<FrequencyOption>) -> Self {
        Self(options)
    }

    /// The standard table: weekly 52 through annually 1
    pub fn standard() -> Self {
        Self(vec![
            FrequencyOption::new(Frequency::Weekly, 52.0),
            FrequencyOption::new(Frequency::BiWeekly, 26.0),
            FrequencyOption::new(Frequency::Every3Weeks, 17.33),
            FrequencyOption::new(Frequency::Monthly, 12.0),
            FrequencyOption::new(Frequency::Every6Weeks, 8.67),
            FrequencyOption::new(Frequency::Every7Weeks, 7.43),
            FrequencyOption::new(Frequency::Every8Weeks, 6.5),
            FrequencyOption::new(Frequency::Quarterly, 4.0),
            FrequencyOption::new(Frequency::Annually, 1.0),
            FrequencyOption::new(Frequency::PerPaycheck, 26.0),
        ])
    }

    /// Find the option for a frequency, if the table has one
    pub fn lookup(&self, frequency: &Frequency) -> Option<&FrequencyOption> {
        self.0.iter().find(|option| &option.value == frequency)
    }

    pub fn options(&self) -> &[FrequencyOption] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::standard()
    }
}
