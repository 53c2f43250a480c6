//! Budgie - per-paycheck savings allocation
//!
//! Converts recurring expenses and savings goals into the amount to set
//! aside from each bi-weekly paycheck, and projects upcoming pay dates.
//!
//! # Architecture
//!
//! - `models`: Money, frequencies, expenses, goals, pay schedules and plans
//! - `engine`: Allocation math, rounding, paycheck dates and plan summaries
//! - `config`: Path and settings management
//! - `storage`: JSON/YAML plan files with atomic writes
//! - `export`: JSON, YAML and CSV renderings of a plan summary
//! - `display`: Terminal text formatting
//! - `logging`: `tracing` subscriber setup
//! - `cli`: Command handlers for the `budgie` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use budgie::engine::{calculate_biweekly_allocation, Rounding};
//! use budgie::models::{Expense, Frequency, FrequencyTable, Money};
//!
//! let rent = Expense::new("Rent", Money::from_dollars(1200), Frequency::Monthly);
//! let per_paycheck =
//!     calculate_biweekly_allocation(&rent, Rounding::off(), &FrequencyTable::standard());
//! assert_eq!(per_paycheck, Money::from_cents(553_85));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{BudgieError, BudgieResult};
