//! CLI command handlers
//!
//! Bridges clap argument parsing with the allocation engine, settings and
//! plan files.

pub mod allocate;
pub mod config;
pub mod paycheck;
pub mod plan;

pub use allocate::{handle_expense_command, handle_goal_command, ExpenseArgs, GoalArgs};
pub use config::{handle_config_command, ConfigArgs};
pub use paycheck::{handle_paychecks_command, PaychecksArgs};
pub use plan::{handle_init_command, handle_plan_command, InitArgs, PlanArgs};

use chrono::{Local, NaiveDate};

use crate::engine::Rounding;
use crate::error::{BudgieError, BudgieResult};
use crate::models::{Frequency, Money, PriorityState};

/// Parse a money argument, naming the field in the error
pub(crate) fn parse_money(value: &str, field: &str) -> BudgieResult<Money> {
    Money::parse(value)
        .map_err(|e| BudgieError::Validation(format!("Invalid {}: {}", field, e)))
}

/// Parse a non-negative money argument
pub(crate) fn parse_amount(value: &str, field: &str) -> BudgieResult<Money> {
    let amount = parse_money(value, field)?;
    if amount.is_negative() {
        return Err(BudgieError::Validation(format!(
            "{} cannot be negative",
            capitalize(field)
        )));
    }
    Ok(amount)
}

pub(crate) fn parse_rounding(value: &str) -> BudgieResult<Rounding> {
    parse_amount(value, "rounding").map(Rounding::from)
}

pub(crate) fn parse_state(value: &str) -> BudgieResult<PriorityState> {
    PriorityState::parse(value).ok_or_else(|| {
        BudgieError::Validation(format!(
            "Unknown state '{}'. Valid options: active, paused, complete",
            value
        ))
    })
}

/// Frequency typed on the command line
///
/// Case-insensitive, with `_` or spaces for hyphens and a few common
/// spellings. Plan and settings files only accept the canonical values.
pub(crate) fn parse_frequency(value: &str) -> Frequency {
    let normalized: String = value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect();

    let canonical = match normalized.as_str() {
        "biweekly" | "fortnightly" => "bi-weekly",
        "annual" | "yearly" => "annually",
        "paycheck" => "per-paycheck",
        other => other,
    };

    match Frequency::parse(canonical) {
        Frequency::Other(_) => Frequency::Other(value.trim().to_string()),
        known => known,
    }
}

pub(crate) fn parse_date(value: &str) -> BudgieResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        BudgieError::Validation(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD: {}",
            value, e
        ))
    })
}

/// `--today` when given, otherwise the local calendar date
pub(crate) fn resolve_today(value: Option<&str>) -> BudgieResult<NaiveDate> {
    match value {
        Some(v) => parse_date(v),
        None => Ok(Local::now().date_naive()),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.50", "amount").unwrap().cents(), 1250);
        let err = parse_amount("-3", "amount").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Amount cannot be negative");
        assert!(parse_amount("twelve", "amount").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_rounding() {
        assert!(!parse_rounding("0").unwrap().is_enabled());
        assert_eq!(parse_rounding("5").unwrap().unit(), Money::from_dollars(5));
    }

    #[test]
    fn test_parse_frequency_accepts_spellings() {
        assert_eq!(parse_frequency("monthly"), Frequency::Monthly);
        assert_eq!(parse_frequency("BiWeekly"), Frequency::BiWeekly);
        assert_eq!(parse_frequency("bi_weekly"), Frequency::BiWeekly);
        assert_eq!(parse_frequency("Yearly"), Frequency::Annually);
        assert_eq!(parse_frequency("per paycheck"), Frequency::PerPaycheck);
        assert_eq!(
            parse_frequency(" Daily "),
            Frequency::Other("Daily".to_string())
        );
    }

    #[test]
    fn test_parse_state_and_date() {
        assert_eq!(parse_state("paused").unwrap(), PriorityState::Paused);
        assert!(parse_state("later").is_err());
        assert_eq!(
            parse_date("2025-02-14").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
        );
        assert!(parse_date("14.02.2025").is_err());
    }
}
