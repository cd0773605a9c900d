//! Error types shared across the computation core

use thiserror::Error;

/// Errors raised by index computation and range solving
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The set being computed carries zero weighted hours. An average over it
    /// is undefined, so the core refuses to produce a value.
    #[error("cannot compute an index over zero weighted hours")]
    ZeroHours,
}

/// Errors raised at the record-provider boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider rejected the session credentials.
    #[error("authentication with the records service failed")]
    Authentication,

    /// The provider could not be reached or could not serve the record.
    #[error("records service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The record was served but violates the data contract
    /// (malformed content, out-of-range grade, zero-hour completed course).
    #[error("invalid student record: {0}")]
    InvalidRecord(String),
}

/// Errors that can end a what-if session
#[derive(Error, Debug)]
pub enum SessionError {
    /// The record provider failed while supplying the baseline.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Index computation failed (zero weighted hours in the baseline).
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The interactive channel failed mid-session.
    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
