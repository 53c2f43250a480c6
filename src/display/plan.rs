//! Terminal rendering of allocation summaries and paycheck schedules

use chrono::NaiveDate;

use super::report::{double_separator, format_percentage, format_progress, separator, truncate};
use crate::config::Settings;
use crate::engine::{AllocationLine, LineKind, PlanSummary};
use crate::models::FrequencyTable;

const WIDTH: usize = 92;

/// Render a plan summary as a table grouped into expenses and goals
pub fn format_plan_summary(summary: &PlanSummary, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut out = String::new();

    out.push_str("Paycheck Allocation Plan\n");
    out.push_str(&double_separator(WIDTH));
    out.push('\n');
    out.push_str(&format!("Rounding: {}\n", summary.rounding));
    if let Some(schedule) = &summary.pay_schedule {
        out.push_str(&format!("Pay schedule: {}\n", schedule));
    }
    if let Some(next) = summary.next_paycheck {
        out.push_str(&format!("Next paycheck: {}\n", format_date(next, settings)));
    }

    for (title, kind) in [("Expenses", LineKind::Expense), ("Goals", LineKind::Goal)] {
        let lines: Vec<&AllocationLine> =
            summary.lines.iter().filter(|l| l.kind == kind).collect();
        if lines.is_empty() {
            continue;
        }

        out.push('\n');
        out.push_str(&format!(
            "{:<22} {:<14} {:>12} {:>12} {:>12}  {:<16} {}\n",
            title, "Cadence", "Amount", "Remaining", "Per Check", "Funded", "Status"
        ));
        out.push_str(&separator(WIDTH));
        out.push('\n');

        for line in lines {
            out.push_str(&format!(
                "{:<22} {:<14} {:>12} {:>12} {:>12}  {} {:>5}  {}\n",
                truncate(&line.name, 22),
                truncate(&line.cadence, 14),
                line.obligation.format_with_symbol(symbol),
                line.remaining.format_with_symbol(symbol),
                line.per_paycheck.format_with_symbol(symbol),
                format_progress(line.funded_fraction, 10),
                format_percentage(line.funded_fraction * 100.0),
                line.status
            ));
            if let Some(on) = line.projected_funded_on {
                out.push_str(&format!(
                    "{:<22} funded in {} paycheck(s), on {}\n",
                    "",
                    line.paychecks_to_fund.unwrap_or_default(),
                    format_date(on, settings)
                ));
            }
        }

        out.push_str(&format!(
            "{:<22} {:<14} {:>12} {:>12} {:>12}\n",
            "",
            "",
            "",
            "subtotal",
            summary.total_for(kind).format_with_symbol(symbol)
        ));
    }

    out.push('\n');
    out.push_str(&double_separator(WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "Set aside per paycheck: {}  ({} of {} item(s) allocating)\n",
        summary.total_per_paycheck.format_with_symbol(symbol),
        summary.allocating_count,
        summary.lines.len()
    ));
    out.push_str(&format!(
        "Still to save:          {}\n",
        summary.total_remaining.format_with_symbol(symbol)
    ));

    out
}

/// Numbered list of paycheck dates
pub fn format_paycheck_dates(dates: &[NaiveDate], settings: &Settings) -> String {
    dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            format!(
                "{:>3}. {} ({})\n",
                i + 1,
                format_date(*date, settings),
                date.format("%a")
            )
        })
        .collect()
}

/// The frequency table with weeks-per-year and an example conversion
pub fn format_frequency_table(table: &FrequencyTable) -> String {
    let mut out = format!("{:<16} {:<16} {:>14}\n", "Value", "Label", "Times per year");
    out.push_str(&separator(48));
    out.push('\n');
    for option in table.options() {
        out.push_str(&format!(
            "{:<16} {:<16} {:>14}\n",
            option.value.as_str(),
            option.label,
            option.weeks_per_year
        ));
    }
    out
}

fn format_date(date: NaiveDate, settings: &Settings) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", date.format(&settings.date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
