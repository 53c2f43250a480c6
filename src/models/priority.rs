//! Lifecycle flag shared by expenses and savings goals

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an obligation currently takes part in allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityState {
    #[default]
    Active,
    /// Temporarily excluded from allocation
    Paused,
    /// Fully funded; excluded from allocation
    Complete,
}

impl PriorityState {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "paused" | "pause" => Some(Self::Paused),
            "complete" | "completed" | "done" => Some(Self::Complete),
            _ => None,
        }
    }

    /// Paused and complete obligations always allocate zero
    pub fn allocates(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for PriorityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Complete => "complete",
        };
        write!(f, "{}", label)
    }
}
