//! Record provider boundary
//!
//! The institutional records service is an external collaborator; the core
//! only ever sees this interface and the raw rows it yields. Assembly into a
//! [`StudentRecord`] happens here: completed rows are validated against the
//! data contract, enrollment credits are converted to class-hours with the
//! configured institutional constant, and zero-hour registrations are
//! dropped before any computation can see them.

use serde::{Deserialize, Serialize};

use crate::core::error::ProviderError;
use crate::core::indexes::GRADE_MAX;
use crate::core::models::{CompletedCourse, InProgressCourse, PublishedIndexes, StudentRecord};

pub mod toml_file;

pub use toml_file::TomlRecordProvider;

/// Raw completed-course row as reported by the provider.
/// The transcript reports load already in class-hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedRow {
    /// Weighted load in class-hours
    pub hours: u32,
    /// Final grade on the 0-10 scale
    pub grade: f64,
}

/// Raw enrollment row as reported by the provider.
/// The enrollment mirror reports load in small integer credit units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRow {
    /// Course label
    pub name: String,
    /// Load in credit units; zero is tolerated here and filtered during
    /// assembly
    #[serde(default)]
    pub credits: u32,
}

/// Interface to the system that holds the student's academic records.
///
/// Implementations may sit on top of anything (a local file, a remote
/// service); the core never learns which. Credential and transport failures
/// surface as [`ProviderError`] and are not retried.
pub trait RecordProvider {
    /// The student's display name.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the record cannot be served.
    fn student_name(&self) -> Result<String, ProviderError>;

    /// Completed coursework in transcript order.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the record cannot be served.
    fn completed_courses(&self) -> Result<Vec<CompletedRow>, ProviderError>;

    /// Current-term enrollments in registration order.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the record cannot be served.
    fn enrolled_courses(&self) -> Result<Vec<EnrollmentRow>, ProviderError>;

    /// Officially published index values, if the provider reports them.
    /// Display-only; never folded back into computations.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] when the record cannot be served.
    fn published_indexes(&self) -> Result<Option<PublishedIndexes>, ProviderError>;
}

/// Assemble a [`StudentRecord`] and the in-progress course list from a
/// provider.
///
/// `class_hours_per_credit` is the institutional conversion constant applied
/// to enrollment credits. Zero-credit registrations are dropped with a
/// warning; they carry no weight and must not reach the solver.
///
/// # Errors
///
/// Propagates provider failures, and returns
/// [`ProviderError::InvalidRecord`] when a completed row violates the data
/// contract (zero hours, grade outside the 0-10 scale).
pub fn load_student(
    provider: &impl RecordProvider,
    class_hours_per_credit: u32,
) -> Result<(StudentRecord, Vec<InProgressCourse>), ProviderError> {
    let name = provider.student_name()?;

    let mut completed = Vec::new();
    for row in provider.completed_courses()? {
        if row.hours == 0 {
            return Err(ProviderError::InvalidRecord(format!(
                "completed course with zero hours (grade {})",
                row.grade
            )));
        }
        if !row.grade.is_finite() || !(0.0..=GRADE_MAX).contains(&row.grade) {
            return Err(ProviderError::InvalidRecord(format!(
                "grade {} outside the 0-10 scale",
                row.grade
            )));
        }
        completed.push(CompletedCourse::new(row.hours, row.grade));
    }

    let mut in_progress = Vec::new();
    for row in provider.enrolled_courses()? {
        if row.credits == 0 {
            crate::warn!("dropping zero-credit registration '{}'", row.name);
            continue;
        }
        in_progress.push(InProgressCourse::new(
            row.name,
            row.credits * class_hours_per_credit,
        ));
    }

    let published = provider.published_indexes()?;

    Ok((StudentRecord::new(name, completed, published), in_progress))
}
