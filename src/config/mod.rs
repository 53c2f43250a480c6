//! Configuration module for Budgie
//!
//! - XDG-compliant path resolution
//! - User settings persistence (rounding, pay schedule, display)

pub mod paths;
pub mod settings;

pub use paths::BudgiePaths;
pub use settings::Settings;
