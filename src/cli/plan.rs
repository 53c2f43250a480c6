//! Plan file commands: summarize a plan and create a starter one

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use super::paycheck::resolve_schedule;
use super::{parse_rounding, resolve_today};
use crate::config::{BudgiePaths, Settings};
use crate::display::format_plan_summary;
use crate::engine::{summarize_plan, Rounding};
use crate::error::{BudgieError, BudgieResult};
use crate::export::{export_summary_csv, export_summary_json, export_summary_yaml, OutputFormat};
use crate::models::BudgetPlan;
use crate::storage::{load_plan, save_plan};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Plan file (JSON, or YAML by extension); defaults to plan.json in the data directory
    pub file: Option<PathBuf>,
    /// Round up to a multiple of this amount (overrides the plan and settings)
    #[arg(short, long)]
    pub rounding: Option<String>,
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
    /// Output format: table, json, yaml or csv
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the starter plan; defaults to plan.json in the data directory
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Overwrite an existing plan file
    #[arg(long)]
    pub force: bool,
}

/// Summarize a plan file and render it in the requested format
pub fn handle_plan_command(
    paths: &BudgiePaths,
    settings: &Settings,
    args: PlanArgs,
) -> BudgieResult<()> {
    let format: OutputFormat = args.format.parse()?;
    let path = args.file.unwrap_or_else(|| paths.plan_file());
    let plan = load_plan(&path)?;

    let rounding = match args.rounding.as_deref() {
        Some(r) => parse_rounding(r)?,
        None => plan
            .rounding
            .map(Rounding::from)
            .unwrap_or_else(|| settings.rounding()),
    };
    let schedule = match &plan.pay_schedule {
        Some(schedule) => Some(schedule.clone()),
        None => resolve_schedule(None, None, settings)?,
    };
    let today = resolve_today(args.today.as_deref())?;

    let summary = summarize_plan(
        &plan,
        rounding,
        &plan.frequency_table(),
        schedule.as_ref(),
        today,
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => {
            if plan.is_empty() {
                writeln!(out, "{} has no expenses or goals.", path.display())?;
            } else {
                write!(out, "{}", format_plan_summary(&summary, settings))?;
            }
        }
        OutputFormat::Json => export_summary_json(&summary, &mut out)?,
        OutputFormat::Yaml => export_summary_yaml(&summary, &mut out)?,
        OutputFormat::Csv => export_summary_csv(&summary, &mut out)?,
    }

    Ok(())
}

/// Write default settings (if missing) and a starter plan
pub fn handle_init_command(
    paths: &BudgiePaths,
    settings: &Settings,
    args: InitArgs,
) -> BudgieResult<()> {
    paths.ensure_directories()?;

    if !paths.is_initialized() {
        settings.save(paths)?;
        println!("Wrote settings to {}", paths.settings_file().display());
    }

    let plan_path = args.plan.unwrap_or_else(|| paths.plan_file());
    match save_plan(&plan_path, &BudgetPlan::starter(), args.force) {
        Ok(()) => {
            println!("Wrote starter plan to {}", plan_path.display());
            println!();
            println!("Edit it, then run 'budgie plan' to see your per-paycheck allocations.");
            Ok(())
        }
        Err(BudgieError::Storage(msg)) if plan_path.exists() && !args.force => {
            println!("{}", msg);
            Ok(())
        }
        Err(e) => Err(e),
    }
}
