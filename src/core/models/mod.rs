//! Data models for `IaaAnalytics`

pub mod course;
pub mod student;

pub use course::{CompletedCourse, HistoryEntry, InProgressCourse};
pub use student::{PublishedIndexes, StudentRecord};
