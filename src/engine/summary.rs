//! Plan-wide allocation summary: per-paycheck totals, funding status and
//! projected funding dates

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::allocation::{calculate_biweekly_allocation, calculate_goal_biweekly_allocation};
use super::paycheck::generate_paycheck_dates;
use super::rounding::Rounding;
use crate::models::{BudgetPlan, FrequencyTable, Money, PaySchedule, PriorityState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Expense,
    Goal,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundingStatus {
    InProgress,
    Funded,
    Paused,
    Complete,
}

impl FundingStatus {
    fn classify(state: PriorityState, remaining: Money) -> Self {
        match state {
            PriorityState::Paused => Self::Paused,
            PriorityState::Complete => Self::Complete,
            PriorityState::Active if remaining.is_zero() => Self::Funded,
            PriorityState::Active => Self::InProgress,
        }
    }
}

impl fmt::Display for FundingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InProgress => "in progress",
            Self::Funded => "funded",
            Self::Paused => "paused",
            Self::Complete => "complete",
        };
        write!(f, "{}", label)
    }
}

/// Allocation and progress for one expense or goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationLine {
    pub name: String,
    pub kind: LineKind,
    /// Frequency label for expenses, "monthly" for goals
    pub cadence: String,
    pub status: FundingStatus,
    pub obligation: Money,
    pub already_saved: Money,
    pub remaining: Money,
    pub per_paycheck: Money,
    /// Share of the obligation already saved, 0.0 to 1.0
    pub funded_fraction: f64,
    pub paychecks_to_fund: Option<u32>,
    pub projected_funded_on: Option<NaiveDate>,
}

impl AllocationLine {
    fn new(
        name: &str,
        kind: LineKind,
        cadence: String,
        state: PriorityState,
        obligation: Money,
        already_saved: Money,
        per_paycheck: Money,
    ) -> Self {
        let remaining = obligation.remaining_after(already_saved);
        Self {
            name: name.to_string(),
            kind,
            cadence,
            status: FundingStatus::classify(state, remaining),
            obligation,
            already_saved,
            remaining,
            per_paycheck,
            funded_fraction: funded_fraction(obligation, already_saved),
            paychecks_to_fund: paychecks_to_fund(remaining, per_paycheck),
            projected_funded_on: None,
        }
    }

    pub fn is_allocating(&self) -> bool {
        self.per_paycheck.is_positive()
    }
}

/// Share of `obligation` covered by `saved`, capped at 1.0
pub fn funded_fraction(obligation: Money, saved: Money) -> f64 {
    if !obligation.is_positive() {
        return 1.0;
    }
    (saved.cents().max(0) as f64 / obligation.cents() as f64).min(1.0)
}

/// Whole paychecks needed to cover `remaining` at `per_paycheck`
pub fn paychecks_to_fund(remaining: Money, per_paycheck: Money) -> Option<u32> {
    if !remaining.is_positive() || !per_paycheck.is_positive() {
        return None;
    }
    let (remaining, per_paycheck) = (remaining.cents(), per_paycheck.cents());
    let count = remaining / per_paycheck + i64::from(remaining % per_paycheck != 0);
    u32::try_from(count).ok()
}

/// Allocation results for a whole plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub rounding: Rounding,
    pub lines: Vec<AllocationLine>,
    pub total_per_paycheck: Money,
    pub total_remaining: Money,
    pub allocating_count: usize,
    pub pay_schedule: Option<PaySchedule>,
    pub next_paycheck: Option<NaiveDate>,
}

impl PlanSummary {
    pub fn expense_lines(&self) -> impl Iterator<Item = &AllocationLine> {
        self.lines.iter().filter(|l| l.kind == LineKind::Expense)
    }

    pub fn goal_lines(&self) -> impl Iterator<Item = &AllocationLine> {
        self.lines.iter().filter(|l| l.kind == LineKind::Goal)
    }

    pub fn total_for(&self, kind: LineKind) -> Money {
        self.lines
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.per_paycheck)
            .sum()
    }
}

/// Run the allocation engine over every entry in `plan`
///
/// `schedule`, when known, turns paycheck counts into projected dates; counts
/// beyond the generated schedule have no date.
pub fn summarize_plan(
    plan: &BudgetPlan,
    rounding: Rounding,
    table: &FrequencyTable,
    schedule: Option<&PaySchedule>,
    today: NaiveDate,
) -> PlanSummary {
    let mut lines = Vec::with_capacity(plan.expenses.len() + plan.goals.len());

    for expense in &plan.expenses {
        lines.push(AllocationLine::new(
            &expense.name,
            LineKind::Expense,
            expense.frequency.to_string(),
            expense.priority_state,
            expense.amount,
            expense.already_saved,
            calculate_biweekly_allocation(expense, rounding, table),
        ));
    }

    for goal in &plan.goals {
        lines.push(AllocationLine::new(
            &goal.name,
            LineKind::Goal,
            "monthly".to_string(),
            goal.priority_state,
            goal.target_amount,
            goal.already_saved,
            calculate_goal_biweekly_allocation(goal, rounding),
        ));
    }

    let paydays = schedule
        .map(|s| generate_paycheck_dates(s, today))
        .unwrap_or_default();

    for line in &mut lines {
        line.projected_funded_on = line
            .paychecks_to_fund
            .and_then(|count| paydays.get(count as usize - 1).copied());
    }

    let allocating: Vec<&AllocationLine> = lines.iter().filter(|l| l.is_allocating()).collect();
    let total_per_paycheck: Money = allocating.iter().map(|l| l.per_paycheck).sum();
    let total_remaining: Money = allocating.iter().map(|l| l.remaining).sum();
    let allocating_count = allocating.len();

    tracing::info!(
        lines = lines.len(),
        allocating = allocating_count,
        total = %total_per_paycheck,
        "plan summarized"
    );

    PlanSummary {
        rounding,
        total_per_paycheck,
        total_remaining,
        allocating_count,
        pay_schedule: schedule.cloned(),
        next_paycheck: paydays.first().copied(),
        lines,
    }
}
