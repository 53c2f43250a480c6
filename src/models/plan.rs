//! Budget plan snapshot: the expenses and goals an allocation run reads

use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::frequency::FrequencyTable;
use super::goal::SavingsGoal;
use super::money::Money;
use super::schedule::PaySchedule;

/// Current plan file schema version
pub const PLAN_SCHEMA_VERSION: u32 = 1;

/// Everything needed to compute a paycheck allocation plan
///
/// The optional fields override the user's settings for this plan only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetPlan {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_options: Option<FrequencyTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_schedule: Option<PaySchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<Money>,
}

fn default_schema_version() -> u32 {
    PLAN_SCHEMA_VERSION
}

impl BudgetPlan {
    pub fn new(expenses: Vec<Expense>, goals: Vec<SavingsGoal>) -> Self {
        Self {
            schema_version: PLAN_SCHEMA_VERSION,
            expenses,
            goals,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty() && self.goals.is_empty()
    }

    /// The plan's own frequency table, or the standard one
    pub fn frequency_table(&self) -> FrequencyTable {
        self.frequency_options.clone().unwrap_or_default()
    }

    /// Check every entry, collecting one message per invalid entry
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.schema_version > PLAN_SCHEMA_VERSION {
            problems.push(format!(
                "Plan schema version {} is newer than supported version {}",
                self.schema_version, PLAN_SCHEMA_VERSION
            ));
        }

        for expense in &self.expenses {
            if let Err(e) = expense.validate() {
                problems.push(format!("expense '{}': {}", expense.name, e));
            }
        }
        for goal in &self.goals {
            if let Err(e) = goal.validate() {
                problems.push(format!("goal '{}': {}", goal.name, e));
            }
        }
        if let Some(table) = &self.frequency_options {
            for option in table.options() {
                if !option.weeks_per_year.is_finite() || option.weeks_per_year < 0.0 {
                    problems.push(format!(
                        "frequency option '{}': weeks per year must be a non-negative number, got {}",
                        option.value, option.weeks_per_year
                    ));
                }
            }
        }
        if let Some(rounding) = self.rounding {
            if rounding.is_negative() {
                problems.push("rounding cannot be negative".to_string());
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// A small starter plan written by `budgie init`
    pub fn starter() -> Self {
        use super::frequency::Frequency;

        Self::new(
            vec![
                Expense::new("Rent", Money::from_dollars(1200), Frequency::Monthly),
                Expense::new("Groceries", Money::from_dollars(150), Frequency::Weekly),
                Expense::new("Car insurance", Money::from_dollars(540), Frequency::Quarterly),
                Expense::new("Streaming", Money::from_cents(1599), Frequency::Monthly),
                Expense::new("Fun money", Money::from_dollars(50), Frequency::PerPaycheck),
            ],
            vec![
                SavingsGoal::new(
                    "Emergency fund",
                    Money::from_dollars(5000),
                    Money::from_dollars(200),
                ),
                SavingsGoal::new("Vacation", Money::from_dollars(1800), Money::from_dollars(150)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, FrequencyOption, PriorityState};

    #[test]
    fn test_minimal_plan_deserializes() {
        let plan: BudgetPlan = serde_json::from_str("{}").unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.schema_version, PLAN_SCHEMA_VERSION);
        assert_eq!(plan.frequency_table(), FrequencyTable::standard());
    }

    #[test]
    fn test_plan_from_yaml() {
        let yaml = r#"
expenses:
  - name: Phone
    amount: 4500
    frequency: monthly
    priority_state: paused
goals:
  - name: Bike
    target_amount: 90000
    monthly_contribution: 7500
    already_saved: 10000
rounding: 100
"#;
        let plan: BudgetPlan = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(plan.expenses.len(), 1);
        assert_eq!(plan.expenses[0].frequency, Frequency::Monthly);
        assert_eq!(plan.expenses[0].priority_state, PriorityState::Paused);
        assert_eq!(plan.goals[0].already_saved.cents(), 10000);
        assert_eq!(plan.rounding, Some(Money::from_dollars(1)));
    }

    #[test]
    fn test_validate_collects_problems() {
        let mut plan = BudgetPlan::starter();
        assert!(plan.validate().is_ok());

        plan.expenses[0].amount = Money::from_dollars(-1);
        plan.goals[0].name = String::new();

        let problems = plan.validate().unwrap_err();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("Rent"));
    }

    #[test]
    fn test_validate_rejects_bad_weeks_per_year() {
        let yaml = r#"
expenses:
  - name: Rent
    amount: 100000
    frequency: monthly
frequency_options:
  - value: monthly
    label: Monthly
    weeks_per_year: -12
  - value: weekly
    label: Weekly
    weeks_per_year: .nan
  - value: quarterly
    label: Quarterly
    weeks_per_year: .inf
  - value: annually
    label: Annually
    weeks_per_year: 1
"#;
        let plan: BudgetPlan = serde_yaml::from_str(yaml).unwrap();
        let problems = plan.validate().unwrap_err();

        assert_eq!(problems.len(), 3);
        assert!(problems[0].contains("'monthly'"));
        assert!(problems[1].contains("'weekly'"));
        assert!(problems[2].contains("'quarterly'"));
    }

    #[test]
    fn test_validate_accepts_custom_table() {
        let mut plan = BudgetPlan::starter();
        plan.frequency_options = Some(FrequencyTable::new(vec![
            FrequencyOption::new(Frequency::Monthly, 12.0),
            FrequencyOption::new(Frequency::Annually, 0.0),
        ]));
        assert!(plan.validate().is_ok());
    }
}
