//! Paycheck schedule command

use clap::Args;

use super::{parse_date, parse_frequency, resolve_today};
use crate::config::Settings;
use crate::display::format_paycheck_dates;
use crate::engine::generate_paycheck_dates;
use crate::error::{BudgieError, BudgieResult};
use crate::models::{Frequency, PaySchedule};

#[derive(Args, Debug)]
pub struct PaychecksArgs {
    /// A known pay date (YYYY-MM-DD); defaults to the configured schedule
    #[arg(long)]
    pub start: Option<String>,
    /// Pay frequency: bi-weekly (14 days), anything else steps 30 days
    #[arg(short, long)]
    pub frequency: Option<String>,
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

/// Work out the schedule from flags, falling back to settings
pub(crate) fn resolve_schedule(
    start: Option<&str>,
    frequency: Option<&str>,
    settings: &Settings,
) -> BudgieResult<Option<PaySchedule>> {
    let configured = settings.pay_schedule.as_ref();

    let start_date = match (start, configured) {
        (Some(s), _) => parse_date(s)?,
        (None, Some(schedule)) => schedule.start_date,
        (None, None) if frequency.is_some() => {
            return Err(BudgieError::Validation(
                "--frequency needs a --start date when no pay schedule is configured".into(),
            ))
        }
        (None, None) => return Ok(None),
    };

    let frequency = match (frequency, configured) {
        (Some(f), _) => parse_frequency(f),
        (None, Some(schedule)) => schedule.frequency.clone(),
        (None, None) => Frequency::BiWeekly,
    };

    Ok(Some(PaySchedule::new(start_date, frequency)))
}

/// Print the next 26 paycheck dates
pub fn handle_paychecks_command(settings: &Settings, args: PaychecksArgs) -> BudgieResult<()> {
    let schedule = resolve_schedule(args.start.as_deref(), args.frequency.as_deref(), settings)?
        .ok_or_else(|| {
            BudgieError::Config(
                "No pay schedule. Pass --start YYYY-MM-DD or run 'budgie config --pay-start YYYY-MM-DD'"
                    .into(),
            )
        })?;
    let today = resolve_today(args.today.as_deref())?;

    let dates = generate_paycheck_dates(&schedule, today);

    println!("Upcoming paychecks ({}):", schedule);
    print!("{}", format_paycheck_dates(&dates, settings));

    Ok(())
}
