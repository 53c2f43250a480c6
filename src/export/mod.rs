//! Export of allocation summaries
//!
//! - CSV: one row per expense or goal (spreadsheet-compatible)
//! - JSON / YAML: the full summary, totals included

pub mod csv;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::engine::PlanSummary;
use crate::error::{BudgieError, BudgieResult};

pub use self::csv::export_summary_csv;

/// Output format for `budgie plan`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = BudgieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(BudgieError::Validation(format!(
                "Unknown format '{}'. Valid options: table, json, yaml, csv",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        };
        write!(f, "{}", label)
    }
}

/// Write the full summary as pretty JSON
pub fn export_summary_json<W: Write>(summary: &PlanSummary, writer: &mut W) -> BudgieResult<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)
        .map_err(|e| BudgieError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgieError::Export(e.to_string()))
}

/// Write the full summary as YAML
pub fn export_summary_yaml<W: Write>(summary: &PlanSummary, writer: &mut W) -> BudgieResult<()> {
    serde_yaml::to_writer(writer, summary).map_err(|e| BudgieError::Export(e.to_string()))
}
