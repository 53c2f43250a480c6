//! Biweekly allocation for expenses and savings goals
//!
//! Both calculations are total: a paused or complete obligation, one that is
//! already fully saved, or an expense whose frequency is missing from the
//! table all allocate zero instead of failing.

use tracing::{debug, warn};

use super::rounding::{Fraction, Rounding};
use crate::models::{Expense, Frequency, FrequencyTable, Money, SavingsGoal};

/// Pay periods in a year for a biweekly paycheck
pub const PAY_PERIODS_PER_YEAR: i128 = 26;

const MONTHS_PER_YEAR: i128 = 12;

/// Unrounded biweekly allocation for an expense, as an exact fraction of cents
///
/// Returns `None` when the expense allocates nothing.
pub fn expense_biweekly_fraction(expense: &Expense, table: &FrequencyTable) -> Option<Fraction> {
    if !expense.priority_state.allocates() {
        return None;
    }

    let remaining = expense.remaining();
    if !remaining.is_positive() {
        return None;
    }

    // Already expressed per pay period
    if expense.frequency == Frequency::PerPaycheck {
        return Some(Fraction::from_money(remaining));
    }

    let Some(option) = table.lookup(&expense.frequency) else {
        warn!(
            expense = %expense.name,
            frequency = %expense.frequency,
            "frequency not in table, allocating nothing"
        );
        return None;
    };

    let weeks_per_year = option.weeks_per_year_hundredths();
    if weeks_per_year <= 0 {
        warn!(
            expense = %expense.name,
            frequency = %expense.frequency,
            weeks_per_year = option.weeks_per_year,
            "non-positive weeks per year, allocating nothing"
        );
        return None;
    }

    // (remaining / amount) * (amount * weeks_per_year / 26); amount cancels
    Some(
        Fraction::from_money(remaining)
            .mul(weeks_per_year as i128, 100 * PAY_PERIODS_PER_YEAR),
    )
}

/// Amount to set aside each paycheck toward an expense
///
/// # Examples
/// ```
/// use budgie::engine::{calculate_biweekly_allocation, Rounding};
/// use budgie::models::{Expense, Frequency, FrequencyTable, Money};
///
/// let rent = Expense::new("Rent", Money::from_dollars(120), Frequency::Monthly);
/// let per_paycheck =
///     calculate_biweekly_allocation(&rent, Rounding::off(), &FrequencyTable::standard());
/// assert_eq!(per_paycheck, Money::from_cents(5538));
/// ```
pub fn calculate_biweekly_allocation(
    expense: &Expense,
    rounding: Rounding,
    table: &FrequencyTable,
) -> Money {
    let allocation = expense_biweekly_fraction(expense, table)
        .map(|raw| raw.round(rounding))
        .unwrap_or_else(Money::zero);

    debug!(
        expense = %expense.name,
        frequency = %expense.frequency,
        state = %expense.priority_state,
        %allocation,
        "expense allocation"
    );
    allocation
}

/// Unrounded biweekly allocation for a goal, as an exact fraction of cents
///
/// The full monthly contribution is annualized regardless of how close the
/// goal is to its target; only a met goal drops to nothing.
pub fn goal_biweekly_fraction(goal: &SavingsGoal) -> Option<Fraction> {
    if !goal.priority_state.allocates() {
        return None;
    }

    if !goal.remaining().is_positive() {
        return None;
    }

    Some(Fraction::from_money(goal.monthly_contribution).mul(MONTHS_PER_YEAR, PAY_PERIODS_PER_YEAR))
}

/// Amount to set aside each paycheck toward a savings goal
///
/// # Examples
/// ```
/// use budgie::engine::{calculate_goal_biweekly_allocation, Rounding};
/// use budgie::models::{Money, SavingsGoal};
///
/// let goal = SavingsGoal::new("Trip", Money::from_dollars(2000), Money::from_dollars(100));
/// let rounded = calculate_goal_biweekly_allocation(&goal, Rounding::to(Money::from_dollars(10)));
/// assert_eq!(rounded, Money::from_dollars(50));
/// ```
pub fn calculate_goal_biweekly_allocation(goal: &SavingsGoal, rounding: Rounding) -> Money {
    let allocation = goal_biweekly_fraction(goal)
        .map(|raw| raw.round(rounding))
        .unwrap_or_else(Money::zero);

    debug!(
        goal = %goal.name,
        state = %goal.priority_state,
        %allocation,
        "goal allocation"
    );
    allocation
}
