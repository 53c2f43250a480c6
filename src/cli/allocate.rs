//! One-off allocation commands for a single expense or goal

use clap::Args;

use super::{parse_amount, parse_frequency, parse_rounding, parse_state};
use crate::config::Settings;
use crate::engine::{calculate_biweekly_allocation, calculate_goal_biweekly_allocation};
use crate::error::BudgieResult;
use crate::models::{Expense, Frequency, FrequencyTable, SavingsGoal};

#[derive(Args, Debug)]
pub struct ExpenseArgs {
    /// Expense amount per occurrence (e.g., "120" or "120.00")
    pub amount: String,
    /// How often the expense comes due (weekly, bi-weekly, monthly, quarterly, ...)
    #[arg(short, long, default_value = "monthly")]
    pub frequency: String,
    /// Amount already set aside
    #[arg(short, long, default_value = "0")]
    pub saved: String,
    /// active, paused or complete
    #[arg(long, default_value = "active")]
    pub state: String,
    /// Round up to a multiple of this amount (0 disables; defaults to settings)
    #[arg(short, long)]
    pub rounding: Option<String>,
    /// Name shown in output
    #[arg(short, long, default_value = "Expense")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct GoalArgs {
    /// Savings target
    pub target: String,
    /// Monthly contribution toward the target
    pub monthly: String,
    /// Amount already saved
    #[arg(short, long, default_value = "0")]
    pub saved: String,
    /// active, paused or complete
    #[arg(long, default_value = "active")]
    pub state: String,
    /// Round up to a multiple of this amount (0 disables; defaults to settings)
    #[arg(short, long)]
    pub rounding: Option<String>,
    /// Name shown in output
    #[arg(short, long, default_value = "Goal")]
    pub name: String,
}

/// Print the per-paycheck allocation for one expense
pub fn handle_expense_command(settings: &Settings, args: ExpenseArgs) -> BudgieResult<()> {
    let expense = Expense::new(
        args.name,
        parse_amount(&args.amount, "amount")?,
        parse_frequency(&args.frequency),
    )
    .with_saved(parse_amount(&args.saved, "saved amount")?)
    .with_state(parse_state(&args.state)?);

    let rounding = match args.rounding.as_deref() {
        Some(r) => parse_rounding(r)?,
        None => settings.rounding(),
    };

    let table = FrequencyTable::standard();
    let allocation = calculate_biweekly_allocation(&expense, rounding, &table);
    let symbol = settings.currency_symbol.as_str();

    println!(
        "{}: {} {}",
        expense.name,
        expense.amount.format_with_symbol(symbol),
        expense.frequency.description()
    );
    println!("  Saved:        {}", expense.already_saved.format_with_symbol(symbol));
    println!("  Remaining:    {}", expense.remaining().format_with_symbol(symbol));
    println!("  Rounding:     {}", rounding);
    println!("  Per paycheck: {}", allocation.format_with_symbol(symbol));

    if !expense.priority_state.allocates() {
        println!();
        println!(
            "'{}' is {}; nothing is allocated.",
            expense.name, expense.priority_state
        );
    } else if expense.frequency != Frequency::PerPaycheck
        && table.lookup(&expense.frequency).is_none()
    {
        println!();
        println!(
            "Unknown frequency '{}'; nothing is allocated. Run 'budgie frequencies' for valid options.",
            expense.frequency
        );
    }

    Ok(())
}

/// Print the per-paycheck allocation for one savings goal
pub fn handle_goal_command(settings: &Settings, args: GoalArgs) -> BudgieResult<()> {
    let goal = SavingsGoal::new(
        args.name,
        parse_amount(&args.target, "target")?,
        parse_amount(&args.monthly, "monthly contribution")?,
    )
    .with_saved(parse_amount(&args.saved, "saved amount")?)
    .with_state(parse_state(&args.state)?);

    let rounding = match args.rounding.as_deref() {
        Some(r) => parse_rounding(r)?,
        None => settings.rounding(),
    };

    let allocation = calculate_goal_biweekly_allocation(&goal, rounding);
    let symbol = settings.currency_symbol.as_str();

    println!(
        "{}: {} target, {}/month",
        goal.name,
        goal.target_amount.format_with_symbol(symbol),
        goal.monthly_contribution.format_with_symbol(symbol)
    );
    println!("  Saved:        {}", goal.already_saved.format_with_symbol(symbol));
    println!("  Remaining:    {}", goal.remaining().format_with_symbol(symbol));
    println!("  Rounding:     {}", rounding);
    println!("  Per paycheck: {}", allocation.format_with_symbol(symbol));

    if !goal.priority_state.allocates() {
        println!();
        println!("'{}' is {}; nothing is allocated.", goal.name, goal.priority_state);
    } else if goal.is_met() {
        println!();
        println!("'{}' has reached its target.", goal.name);
    }

    Ok(())
}
