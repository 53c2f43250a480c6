//! Storage layer for Budgie
//!
//! Budgie owns two kinds of file: the settings file and budget plan files.
//! Both are read as snapshots; the engine never writes to them.

pub mod file_io;
pub mod plan;

pub use file_io::{read_json, read_required, write_json_atomic, FileFormat};
pub use plan::{load_plan, save_plan};
