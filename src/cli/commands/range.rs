//! Range command handler

use std::path::Path;

use iaa_analytics::config::Config;
use iaa_analytics::core::indexes::format_index;
use iaa_analytics::core::range::IndexBounds;
use iaa_analytics::error;

use super::load_or_exit;

/// Show the achievable range of the cumulative index this term.
///
/// # Arguments
/// * `record` - Path to the student record file
/// * `config` - Configuration with the institutional conversion constant
/// * `verbose` - Whether to list the in-progress courses behind the range
pub fn run(record: &Path, config: &Config, verbose: bool) {
    let (student, in_progress) = load_or_exit(record, config);

    let baseline = student.baseline_entries();
    let bounds = match IndexBounds::solve(&baseline, &in_progress) {
        Ok(bounds) => bounds,
        Err(err) => {
            error!("Range computation failed for {}: {err}", student.name);
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    println!(
        "{}'s IAA can range from {} to {} this term.",
        student.name,
        format_index(bounds.min),
        format_index(bounds.max)
    );

    if verbose {
        if in_progress.is_empty() {
            println!("  (no in-progress courses; the index is already settled)");
        } else {
            println!("  Over {} in-progress course(s):", in_progress.len());
            for course in &in_progress {
                println!("    {} ({} hours)", course.name, course.hours);
            }
        }
    }
}
