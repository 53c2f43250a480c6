//! Recurring and one-time expenses

use serde::{Deserialize, Serialize};
use std::fmt;

use super::frequency::Frequency;
use super::money::Money;
use super::priority::PriorityState;

/// An obligation that comes due at some frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub name: String,
    pub amount: Money,
    pub frequency: Frequency,
    #[serde(default)]
    pub already_saved: Money,
    #[serde(default)]
    pub priority_state: PriorityState,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            amount,
            frequency,
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

    /// Amount still to be set aside, never negative
    pub fn remaining(&self) -> Money {
        self.amount.remaining_after(self.already_saved)
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.already_saved.is_negative() {
            return Err(ExpenseValidationError::NegativeSaved);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.amount, self.frequency)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount,
    NegativeSaved,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::NegativeSaved => write!(f, "Already-saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
