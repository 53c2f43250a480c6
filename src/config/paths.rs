//! Path management for Budgie
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGIE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budgie` or `~/.config/budgie`
//! 3. Windows: `%APPDATA%\budgie`

use std::path::{Path, PathBuf};

use crate::error::BudgieError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGIE_DATA_DIR";

/// Manages all paths used by Budgie
#[derive(Debug, Clone)]
pub struct BudgiePaths {
    base_dir: PathBuf,
}

impl BudgiePaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be
    /// determined.
    pub fn new() -> Result<Self, BudgieError> {
        Self::from_override(std::env::var(DATA_DIR_ENV).ok().as_deref())
    }

    /// Use `custom` as the base directory when it is non-blank, otherwise the
    /// platform default
    pub fn from_override(custom: Option<&str>) -> Result<Self, BudgieError> {
        let base_dir = match custom {
            Some(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgiePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Settings file (config.json)
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default plan file used when no path is given on the command line
    pub fn plan_file(&self) -> PathBuf {
        self.base_dir.join("plan.json")
    }

    pub fn ensure_directories(&self) -> Result<(), BudgieError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            BudgieError::Io(format!(
                "Failed to create directory {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }

    /// Check if Budgie has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgieError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgieError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budgie"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgieError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgieError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budgie"))
}
