//! Core data models for Budgie
//!
//! Expenses, savings goals, the frequency table and the pay schedule. The
//! allocation engine only reads these; it never mutates them.

pub mod expense;
pub mod frequency;
pub mod goal;
pub mod money;
pub mod plan;
pub mod priority;
pub mod schedule;

pub use expense::{Expense, ExpenseValidationError};
pub use frequency::{Frequency, FrequencyOption, FrequencyTable};
pub use goal::{GoalValidationError, SavingsGoal};
pub use money::{Money, MoneyParseError};
pub use plan::{BudgetPlan, PLAN_SCHEMA_VERSION};
pub use priority::PriorityState;
pub use schedule::{PaySchedule, ScheduleParseError};
