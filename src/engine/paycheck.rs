//! Upcoming paycheck dates

use chrono::{Duration, Local, NaiveDate};
use tracing::warn;

use crate::models::PaySchedule;

/// Number of paycheck dates produced for a schedule
pub const PAYCHECK_COUNT: usize = 26;

/// Upper bound on steps taken to catch a schedule up to today
pub const MAX_CATCH_UP_STEPS: u32 = 100;

/// The next [`PAYCHECK_COUNT`] paycheck dates on or after `today`
///
/// Starting from the schedule's start date, the date is advanced one
/// pay period at a time until it is no longer before `today`. The catch-up is
/// capped at [`MAX_CATCH_UP_STEPS`]; a start date further in the past than
/// that yields a sequence beginning before `today`.
///
/// # Examples
/// ```
/// use budgie::engine::generate_paycheck_dates;
/// use budgie::models::PaySchedule;
/// use chrono::NaiveDate;
///
/// let schedule = PaySchedule::parse("2025-01-03", "bi-weekly").unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
/// let dates = generate_paycheck_dates(&schedule, today);
///
/// assert_eq!(dates.len(), 26);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
/// ```
pub fn generate_paycheck_dates(schedule: &PaySchedule, today: NaiveDate) -> Vec<NaiveDate> {
    let step = Duration::days(schedule.days_between());

    let mut first = schedule.start_date;
    let mut steps = 0;
    while first < today && steps < MAX_CATCH_UP_STEPS {
        first += step;
        steps += 1;
    }

    if first < today {
        warn!(
            start = %schedule.start_date,
            %today,
            "pay schedule start too far in the past, stopped after {} periods",
            MAX_CATCH_UP_STEPS
        );
    }

    std::iter::successors(Some(first), |date| Some(*date + step))
        .take(PAYCHECK_COUNT)
        .collect()
}

/// [`generate_paycheck_dates`] relative to the local calendar date
pub fn generate_paycheck_dates_from_now(schedule: &PaySchedule) -> Vec<NaiveDate> {
    generate_paycheck_dates(schedule, Local::now().date_naive())
}
