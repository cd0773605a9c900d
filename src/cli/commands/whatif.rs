//! What-if command handler

use std::path::Path;

use iaa_analytics::config::Config;
use iaa_analytics::core::session::WhatIfSession;
use iaa_analytics::error;

use super::load_or_exit;
use crate::input::ConsoleIo;

/// Run an interactive what-if session over the record's baseline.
///
/// # Arguments
/// * `record` - Path to the student record file
/// * `config` - Configuration with the institutional conversion constant
/// * `range_upfront` - Show the achievable range immediately instead of asking
pub fn run(record: &Path, config: &Config, range_upfront: bool) {
    let (student, in_progress) = load_or_exit(record, config);

    let mut io = match ConsoleIo::new() {
        Ok(io) => io,
        Err(err) => {
            error!("Terminal initialization failed: {err}");
            eprintln!("✗ Failed to initialize the terminal: {err}");
            std::process::exit(1);
        }
    };

    let mut session = WhatIfSession::new(&student, &in_progress, &mut io, range_upfront);
    if let Err(err) = session.run() {
        error!("What-if session failed for {}: {err}", student.name);
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}
