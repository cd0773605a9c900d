//! Config command handler

use crate::args::ConfigSubcommand;
use iaa_analytics::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key),
        Some(ConfigSubcommand::Set { key, value }) => {
            let outcome = config
                .set(&key, &value)
                .map(|()| format!("Set {key} = {value}"));
            apply(config, outcome);
        }
        Some(ConfigSubcommand::Unset { key }) => {
            let outcome = config
                .unset(&key, defaults)
                .map(|()| format!("Reset {key} to default"));
            apply(config, outcome);
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

/// Print one config value, or the whole configuration
fn show(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
}

/// Persist an in-memory config change, reporting the outcome
fn apply(config: &Config, outcome: Result<String, String>) {
    let message = match outcome {
        Ok(message) => message,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    println!("✓ {message}");
}

/// Delete the config file after confirmation
fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
