//! Display formatting for terminal output

pub mod plan;
pub mod report;

pub use plan::{format_frequency_table, format_paycheck_dates, format_plan_summary};
