//! Settings and plan file I/O
//!
//! Files are JSON or YAML, chosen by extension. Writes go to a temporary
//! sibling file that is synced and then renamed over the target.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use crate::error::BudgieError;

/// On-disk encoding of a settings or plan file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// `.yaml` / `.yml` files are YAML, everything else JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a file, returning the default value if it doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, BudgieError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "file missing, using defaults");
        return Ok(T::default());
    }
    read_required(path)
}

/// Read a file that must exist
pub fn read_required<T, P>(path: P) -> Result<T, BudgieError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Err(BudgieError::plan_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| BudgieError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    let parsed = match FileFormat::from_path(path) {
        FileFormat::Json => serde_json::from_reader(reader).map_err(|e| e.to_string()),
        FileFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| e.to_string()),
    };

    let value = parsed.map_err(|e| {
        BudgieError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })?;
    info!(path = %path.display(), "loaded file");
    Ok(value)
}

/// Write a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgieError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgieError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| BudgieError::Storage(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    let encoded = match FileFormat::from_path(path) {
        FileFormat::Json => serde_json::to_writer_pretty(&mut writer, data).map_err(|e| e.to_string()),
        FileFormat::Yaml => serde_yaml::to_writer(&mut writer, data).map_err(|e| e.to_string()),
    };

    let finished = encoded
        .map_err(|e| BudgieError::Storage(format!("Failed to serialize data: {}", e)))
        .and_then(|()| {
            writer
                .flush()
                .map_err(|e| BudgieError::Storage(format!("Failed to flush data: {}", e)))
        })
        .and_then(|()| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| BudgieError::Storage(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = finished {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgieError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    info!(path = %path.display(), "wrote file");
    Ok(())
}
