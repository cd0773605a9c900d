//! Summary command handler

use std::path::Path;

use iaa_analytics::config::Config;
use iaa_analytics::core::indexes::{format_index, AcademicIndexes};
use iaa_analytics::{error, info};

use super::load_or_exit;

/// Show a student's recomputed indices, plus any officially published values.
///
/// # Arguments
/// * `record` - Path to the student record file
/// * `config` - Configuration with the institutional conversion constant
/// * `verbose` - Whether to show course counts alongside the indices
pub fn run(record: &Path, config: &Config, verbose: bool) {
    let (student, in_progress) = load_or_exit(record, config);
    info!("Record loaded for {}", student.name);

    let baseline = student.baseline_entries();
    let indexes = match AcademicIndexes::compute(&baseline, &[]) {
        Ok(indexes) => indexes,
        Err(err) => {
            error!("Index computation failed for {}: {err}", student.name);
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    println!("Student: {}", student.name);
    println!("  IAA: {}", format_index(indexes.iaa));
    println!(
        "  IAP: {}",
        indexes.iap.map_or_else(|| "--".to_string(), format_index)
    );

    if verbose {
        println!("  Completed courses: {}", student.completed.len());
        println!("  In-progress courses: {}", in_progress.len());
    }

    if let Some(published) = &student.published {
        println!("Reported by the institution (shown as published, not recomputed):");
        for (label, value) in [
            ("IAA", &published.iaa),
            ("IA", &published.ia),
            ("IAP", &published.iap),
        ] {
            if !value.is_empty() {
                println!("  {label}: {value}");
            }
        }
    }
}
