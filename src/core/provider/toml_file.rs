//! TOML-file-backed record provider
//!
//! Serves a student record from a local TOML file. Used by the CLI so the
//! core stays fully offline; a networked provider would implement the same
//! [`RecordProvider`] trait.
//!
//! File shape:
//!
//! ```toml
//! student = "Ana Souza"
//!
//! [[completed]]
//! hours = 60
//! grade = 7.5
//!
//! [[enrolled]]
//! name = "EEL5105"
//! credits = 5
//!
//! [published]
//! iaa = "7.70"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::{CompletedRow, EnrollmentRow, RecordProvider};
use crate::core::error::ProviderError;
use crate::core::models::PublishedIndexes;

/// On-disk record schema
#[derive(Debug, Clone, Deserialize)]
struct RecordFile {
    student: String,
    #[serde(default)]
    completed: Vec<CompletedRow>,
    #[serde(default)]
    enrolled: Vec<EnrollmentRow>,
    published: Option<PublishedIndexes>,
}

/// Record provider reading a student record from a TOML file
#[derive(Debug, Clone)]
pub struct TomlRecordProvider {
    record: RecordFile,
}

impl TomlRecordProvider {
    /// Load and parse a record file.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ServiceUnavailable`] when the file cannot be
    /// read, and [`ProviderError::InvalidRecord`] when its content is not a
    /// valid record.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| {
            ProviderError::ServiceUnavailable(format!("{}: {err}", path.display()))
        })?;

        let record: RecordFile = toml::from_str(&content)
            .map_err(|err| ProviderError::InvalidRecord(format!("{}: {err}", path.display())))?;

        Ok(Self { record })
    }
}

impl RecordProvider for TomlRecordProvider {
    fn student_name(&self) -> Result<String, ProviderError> {
        Ok(self.record.student.clone())
    }

    fn completed_courses(&self) -> Result<Vec<CompletedRow>, ProviderError> {
        Ok(self.record.completed.clone())
    }

    fn enrolled_courses(&self) -> Result<Vec<EnrollmentRow>, ProviderError> {
        Ok(self.record.enrolled.clone())
    }

    fn published_indexes(&self) -> Result<Option<PublishedIndexes>, ProviderError> {
        Ok(self.record.published.clone())
    }
}
