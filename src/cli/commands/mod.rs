//! CLI command handlers for `IaaAnalytics`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod range;
pub mod summary;
pub mod whatif;

use std::path::{Path, PathBuf};

use iaa_analytics::config::Config;
use iaa_analytics::core::models::{InProgressCourse, StudentRecord};
use iaa_analytics::core::provider::{load_student, TomlRecordProvider};
use iaa_analytics::error;

/// Resolve a record argument: taken as given when it names an existing file,
/// otherwise searched inside the configured records directory.
fn resolve_record_path(record: &Path, config: &Config) -> PathBuf {
    if record.exists() || config.paths.records_dir.is_empty() {
        return record.to_path_buf();
    }
    PathBuf::from(&config.paths.records_dir).join(record)
}

/// Load and assemble a student record, or terminate: provider failures are
/// fatal because no valid record is available to compute against.
fn load_or_exit(record: &Path, config: &Config) -> (StudentRecord, Vec<InProgressCourse>) {
    let path = resolve_record_path(record, config);

    let loaded = TomlRecordProvider::load(&path)
        .and_then(|provider| load_student(&provider, config.institution.class_hours_per_credit));

    match loaded {
        Ok(data) => data,
        Err(err) => {
            error!("Failed to load record {}: {err}", path.display());
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}
