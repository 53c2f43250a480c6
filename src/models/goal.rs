//! Savings goals funded by a fixed monthly contribution

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::priority::PriorityState;

/// A savings target accrued through an explicit monthly contribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub name: String,
    pub target_amount: Money,
    pub monthly_contribution: Money,
    #[serde(default)]
    pub already_saved: Money,
    #[serde(default)]
    pub priority_state: PriorityState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: Money, monthly_contribution: Money) -> Self {
        Self {
            name: name.into(),
            target_amount,
            monthly_contribution,
            already_saved: Money::zero(),
            priority_state: PriorityState::Active,
            notes: String::new(),
        }
    }

    pub fn with_saved(mut self, already_saved: Money) -> Self {
        self.already_saved = already_saved;
        self
    }

    pub fn with_state(mut self, priority_state: PriorityState) -> Self {
        self.priority_state = priority_state;
        self
    }

    pub fn remaining(&self) -> Money {
        self.target_amount.remaining_after(self.already_saved)
    }

    pub fn is_met(&self) -> bool {
        self.remaining().is_zero()
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if self.target_amount.is_negative() {
            return Err(GoalValidationError::NegativeTarget);
        }
        if self.monthly_contribution.is_negative() {
            return Err(GoalValidationError::NegativeContribution);
        }
        if self.already_saved.is_negative() {
            return Err(GoalValidationError::NegativeSaved);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} of {} ({}/month)",
            self.name, self.already_saved, self.target_amount, self.monthly_contribution
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NegativeTarget,
    NegativeContribution,
    NegativeSaved,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NegativeTarget => write!(f, "Goal target cannot be negative"),
            Self::NegativeContribution => write!(f, "Monthly contribution cannot be negative"),
            Self::NegativeSaved => write!(f, "Already-saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}
