use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use budgie::cli::{
    handle_config_command, handle_expense_command, handle_goal_command, handle_init_command,
    handle_paychecks_command, handle_plan_command, ConfigArgs, ExpenseArgs, GoalArgs, InitArgs,
    PaychecksArgs, PlanArgs,
};
use budgie::config::{BudgiePaths, Settings};
use budgie::display::format_frequency_table;
use budgie::logging::init_logging;
use budgie::models::FrequencyTable;

#[derive(Parser)]
#[command(
    name = "budgie",
    version,
    about = "Turn recurring expenses and savings goals into per-paycheck allocations",
    long_about = "Budgie works out how much to set aside from each bi-weekly paycheck \
                  so that recurring expenses are covered when they come due and \
                  savings goals keep moving toward their targets."
)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-paycheck allocation for one recurring expense
    Expense(ExpenseArgs),

    /// Per-paycheck allocation for one savings goal
    Goal(GoalArgs),

    /// List the next 26 paycheck dates
    #[command(alias = "dates")]
    Paychecks(PaychecksArgs),

    /// Summarize every expense and goal in a plan file
    Plan(PlanArgs),

    /// Show supported expense frequencies
    #[command(alias = "freq")]
    Frequencies,

    /// Create settings and a starter plan
    Init(InitArgs),

    /// Show or update settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgiePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(cli.verbose, &settings.log_level);

    match cli.command {
        Some(Commands::Expense(args)) => handle_expense_command(&settings, args)?,
        Some(Commands::Goal(args)) => handle_goal_command(&settings, args)?,
        Some(Commands::Paychecks(args)) => handle_paychecks_command(&settings, args)?,
        Some(Commands::Plan(args)) => handle_plan_command(&paths, &settings, args)?,
        Some(Commands::Frequencies) => {
            print!("{}", format_frequency_table(&FrequencyTable::standard()));
        }
        Some(Commands::Init(args)) => handle_init_command(&paths, &settings, args)?,
        Some(Commands::Config(args)) => handle_config_command(&paths, &settings, args)?,
        None => {
            println!("Budgie - per-paycheck savings planner");
            println!();
            println!("Run 'budgie --help' for usage information.");
            println!("Run 'budgie init' to create a starter plan.");
        }
    }

    Ok(())
}
