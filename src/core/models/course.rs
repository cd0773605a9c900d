//! Course models

use serde::{Deserialize, Serialize};

/// A course the student has already completed and been graded on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedCourse {
    /// Weighted course load in class-hours (always positive)
    pub hours: u32,

    /// Final grade on the 0-10 scale, already on the official half-point grid
    pub grade: f64,
}

impl CompletedCourse {
    /// Create a new completed course
    ///
    /// # Arguments
    /// * `hours` - Weighted course load in class-hours
    /// * `grade` - Final grade on the 0-10 scale
    #[must_use]
    pub const fn new(hours: u32, grade: f64) -> Self {
        Self { hours, grade }
    }
}

/// A course the student is currently enrolled in, not yet graded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InProgressCourse {
    /// Course label (e.g., "EEL5105")
    pub name: String,

    /// Weighted course load in class-hours (always positive; zero-hour
    /// registrations are dropped at the provider boundary)
    pub hours: u32,
}

impl InProgressCourse {
    /// Create a new in-progress course
    #[must_use]
    pub const fn new(name: String, hours: u32) -> Self {
        Self { name, hours }
    }
}

/// A single `(hours, grade)` pair as consumed by index computation.
///
/// Both a [`CompletedCourse`] and an in-progress course resolved with a
/// hypothetical grade reduce to this shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    /// Weighted course load in class-hours
    pub hours: u32,

    /// Grade on the 0-10 scale
    pub grade: f64,
}

impl HistoryEntry {
    /// Create a new history entry
    #[must_use]
    pub const fn new(hours: u32, grade: f64) -> Self {
        Self { hours, grade }
    }

    /// Weighted contribution of this entry, `hours * grade`
    #[must_use]
    pub fn weight(&self) -> f64 {
        f64::from(self.hours) * self.grade
    }
}

impl From<&CompletedCourse> for HistoryEntry {
    fn from(course: &CompletedCourse) -> Self {
        Self::new(course.hours, course.grade)
    }
}
