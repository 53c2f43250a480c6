//! CSV export of allocation lines

use serde::Serialize;
use std::io::Write;

use crate::engine::PlanSummary;
use crate::error::{BudgieError, BudgieResult};

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Kind")]
    kind: String,
    #[serde(rename = "Cadence")]
    cadence: &'a str,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Amount")]
    obligation: String,
    #[serde(rename = "Saved")]
    saved: String,
    #[serde(rename = "Remaining")]
    remaining: String,
    #[serde(rename = "Per Paycheck")]
    per_paycheck: String,
    #[serde(rename = "Funded %")]
    funded_pct: String,
    #[serde(rename = "Paychecks To Fund")]
    paychecks_to_fund: Option<u32>,
    #[serde(rename = "Funded On")]
    funded_on: Option<String>,
}

/// Export one row per allocation line, amounts without currency symbols
pub fn export_summary_csv<W: Write>(summary: &PlanSummary, writer: W) -> BudgieResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for line in &summary.lines {
        csv_writer
            .serialize(CsvRow {
                name: &line.name,
                kind: line.kind.to_string(),
                cadence: &line.cadence,
                status: line.status.to_string(),
                obligation: line.obligation.format_plain(),
                saved: line.already_saved.format_plain(),
                remaining: line.remaining.format_plain(),
                per_paycheck: line.per_paycheck.format_plain(),
                funded_pct: format!("{:.1}", line.funded_fraction * 100.0),
                paychecks_to_fund: line.paychecks_to_fund,
                funded_on: line
                    .projected_funded_on
                    .map(|d| d.format("%Y-%m-%d").to_string()),
            })
            .map_err(|e| BudgieError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgieError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{summarize_plan, Rounding};
    use crate::models::{BudgetPlan, Expense, Frequency, FrequencyTable, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_rows() {
        let plan = BudgetPlan::new(
            vec![Expense::new("Phone, mobile", Money::from_dollars(120), Frequency::Monthly)],
            vec![],
        );
        let summary = summarize_plan(
            &plan,
            Rounding::off(),
            &FrequencyTable::standard(),
            None,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );

        let mut out = Vec::new();
        export_summary_csv(&summary, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "Name,Kind,Cadence,Status,Amount,Saved,Remaining,Per Paycheck,Funded %,Paychecks To Fund,Funded On"
        );
        assert_eq!(
            lines.next().unwrap(),
            "\"Phone, mobile\",expense,monthly,in progress,120.00,0.00,120.00,55.38,0.0,3,"
        );
        assert!(lines.next().is_none());
    }
}
