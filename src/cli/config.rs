//! Show or update settings

use clap::Args;

use super::{parse_amount, parse_date, parse_frequency};
use crate::config::{BudgiePaths, Settings};
use crate::error::{BudgieError, BudgieResult};
use crate::models::{Frequency, PaySchedule};

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Default rounding unit for allocations (0 disables)
    #[arg(long)]
    pub rounding: Option<String>,
    /// A known pay date (YYYY-MM-DD)
    #[arg(long)]
    pub pay_start: Option<String>,
    /// Pay frequency (bi-weekly, monthly, ...)
    #[arg(long)]
    pub pay_frequency: Option<String>,
    /// Remove the configured pay schedule
    #[arg(long, conflicts_with_all = ["pay_start", "pay_frequency"])]
    pub clear_pay_schedule: bool,
    /// Currency symbol used in output
    #[arg(long)]
    pub currency: Option<String>,
    /// Date format (strftime), e.g. "%d/%m/%Y"
    #[arg(long)]
    pub date_format: Option<String>,
    /// Default log level (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl ConfigArgs {
    fn has_updates(&self) -> bool {
        self.rounding.is_some()
            || self.pay_start.is_some()
            || self.pay_frequency.is_some()
            || self.clear_pay_schedule
            || self.currency.is_some()
            || self.date_format.is_some()
            || self.log_level.is_some()
    }
}

/// Apply requested changes to a copy of `settings`
pub fn apply_config_updates(settings: &Settings, args: &ConfigArgs) -> BudgieResult<Settings> {
    let mut updated = settings.clone();

    if let Some(rounding) = &args.rounding {
        updated.rounding_option = parse_amount(rounding, "rounding")?;
    }

    if args.clear_pay_schedule {
        updated.pay_schedule = None;
    } else if args.pay_start.is_some() || args.pay_frequency.is_some() {
        let start_date = match (&args.pay_start, &settings.pay_schedule) {
            (Some(start), _) => parse_date(start)?,
            (None, Some(existing)) => existing.start_date,
            (None, None) => {
                return Err(BudgieError::Validation(
                    "--pay-frequency needs --pay-start when no pay schedule is configured".into(),
                ))
            }
        };
        let frequency = match (&args.pay_frequency, &settings.pay_schedule) {
            (Some(f), _) => parse_frequency(f),
            (None, Some(existing)) => existing.frequency.clone(),
            (None, None) => Frequency::BiWeekly,
        };
        updated.pay_schedule = Some(PaySchedule::new(start_date, frequency));
    }

    if let Some(currency) = &args.currency {
        updated.currency_symbol = currency.clone();
    }
    if let Some(date_format) = &args.date_format {
        updated.date_format = date_format.clone();
    }
    if let Some(level) = &args.log_level {
        let level = level.trim().to_lowercase();
        if !["error", "warn", "info", "debug", "trace", "off"].contains(&level.as_str()) {
            return Err(BudgieError::Validation(format!(
                "Unknown log level '{}'. Valid options: error, warn, info, debug, trace, off",
                level
            )));
        }
        updated.log_level = level;
    }

    updated.validate()?;
    Ok(updated)
}

pub fn handle_config_command(
    paths: &BudgiePaths,
    settings: &Settings,
    args: ConfigArgs,
) -> BudgieResult<()> {
    let settings = if args.has_updates() {
        let updated = apply_config_updates(settings, &args)?;
        updated.save(paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
        updated
    } else {
        settings.clone()
    };

    println!("Budgie Configuration");
    println!("====================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Default plan:   {}", paths.plan_file().display());
    println!();
    println!("Settings:");
    println!("  Rounding:      {}", settings.rounding());
    match &settings.pay_schedule {
        Some(schedule) => println!("  Pay schedule:  {}", schedule),
        None => println!("  Pay schedule:  (not set)"),
    }
    println!("  Currency:      {}", settings.currency_symbol);
    println!("  Date format:   {}", settings.date_format);
    println!("  Log level:     {}", settings.log_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_no_updates() {
        assert!(!ConfigArgs::default().has_updates());
    }

    #[test]
    fn test_set_rounding_and_schedule() {
        let args = ConfigArgs {
            rounding: Some("5".into()),
            pay_start: Some("2025-01-03".into()),
            ..ConfigArgs::default()
        };
        let updated = apply_config_updates(&Settings::default(), &args).unwrap();

        assert_eq!(updated.rounding_option, Money::from_dollars(5));
        let schedule = updated.pay_schedule.unwrap();
        assert_eq!(schedule.start_date, NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        assert_eq!(schedule.frequency, Frequency::BiWeekly);
    }

    #[test]
    fn test_change_frequency_keeps_start() {
        let settings = Settings {
            pay_schedule: Some(PaySchedule::parse("2025-01-03", "bi-weekly").unwrap()),
            ..Settings::default()
        };
        let args = ConfigArgs {
            pay_frequency: Some("monthly".into()),
            ..ConfigArgs::default()
        };
        let updated = apply_config_updates(&settings, &args).unwrap();
        assert_eq!(
            updated.pay_schedule,
            Some(PaySchedule::parse("2025-01-03", "monthly").unwrap())
        );
    }

    #[test]
    fn test_clear_schedule() {
        let settings = Settings {
            pay_schedule: Some(PaySchedule::parse("2025-01-03", "bi-weekly").unwrap()),
            ..Settings::default()
        };
        let args = ConfigArgs {
            clear_pay_schedule: true,
            ..ConfigArgs::default()
        };
        assert!(apply_config_updates(&settings, &args)
            .unwrap()
            .pay_schedule
            .is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        let negative = ConfigArgs {
            rounding: Some("-1".into()),
            ..ConfigArgs::default()
        };
        assert!(apply_config_updates(&Settings::default(), &negative).is_err());

        let level = ConfigArgs {
            log_level: Some("loud".into()),
            ..ConfigArgs::default()
        };
        assert!(apply_config_updates(&Settings::default(), &level).is_err());

        let orphan_frequency = ConfigArgs {
            pay_frequency: Some("bi-weekly".into()),
            ..ConfigArgs::default()
        };
        assert!(apply_config_updates(&Settings::default(), &orphan_frequency).is_err());
    }
}
