//! Core module: record models, index computation, range solving, and the
//! what-if session loop, plus the provider boundary supplying academic records

pub mod config;
pub mod error;
pub mod indexes;
pub mod models;
pub mod provider;
pub mod range;
pub mod session;

/// Returns the current version of the `IaaAnalytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
