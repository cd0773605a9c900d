//! CLI argument definitions for `IaaAnalytics`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use iaa_analytics::config::ConfigOverrides;
use iaa_analytics::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `class_hours_per_credit`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show a student's performance indices.
    ///
    /// Recomputes IAA and IAP from the record's raw entries; any officially
    /// published values in the record are shown alongside for comparison.
    Summary {
        /// Path to a student record file (searched in `records_dir` when not
        /// found as given)
        #[arg(value_name = "RECORD")]
        record: PathBuf,
    },
    /// Show how far the cumulative index can move this term.
    ///
    /// Bounds the IAA over every combination of future grades for the
    /// record's in-progress courses.
    Range {
        /// Path to a student record file
        #[arg(value_name = "RECORD")]
        record: PathBuf,
    },
    /// Run an interactive what-if session.
    ///
    /// Prompts for a hypothetical grade per in-progress course, shows the
    /// resulting IAA/IA/IAP, and repeats on request from the untouched
    /// baseline.
    Whatif {
        /// Path to a student record file
        #[arg(value_name = "RECORD")]
        record: PathBuf,

        /// Show the achievable range up front instead of asking
        #[arg(long)]
        range: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "iaacalc",
    about = "IaaAnalytics command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config class-hours-per-credit constant
    #[arg(long = "config-credit-hours", value_name = "HOURS")]
    pub config_credit_hours: Option<u32>,

    /// Override config class-hours-per-credit constant (short form)
    #[arg(long = "credit-hours", value_name = "HOURS")]
    pub credit_hours: Option<u32>,

    /// Override config records directory
    #[arg(long = "config-records-dir", value_name = "DIR")]
    pub config_records_dir: Option<PathBuf>,

    /// Override config records directory (short form)
    #[arg(long = "records-dir", value_name = "DIR")]
    pub records_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--credit-hours`) take precedence over long-form flags (e.g.,
    /// `--config-credit-hours`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            class_hours_per_credit: self.credit_hours.or(self.config_credit_hours),
            records_dir: self
                .records_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_records_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_credit_hours: None,
            credit_hours: None,
            config_records_dir: None,
            records_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();

        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.class_hours_per_credit.is_none());
        assert!(overrides.records_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/test.log")),
            config_verbose: Some(true),
            credit_hours: Some(15),
            records_dir: Some(PathBuf::from("/records")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.class_hours_per_credit, Some(15));
        assert_eq!(overrides.records_dir, Some("/records".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_credit_hours: Some(12),
            credit_hours: Some(18),
            config_records_dir: Some(PathBuf::from("/long/records")),
            records_dir: Some(PathBuf::from("/short/records")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.class_hours_per_credit, Some(18));
        assert_eq!(overrides.records_dir, Some("/short/records".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = Cli {
            config_credit_hours: Some(12),
            config_records_dir: Some(PathBuf::from("/long/records")),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.class_hours_per_credit, Some(12));
        assert_eq!(overrides.records_dir, Some("/long/records".to_string()));
    }
}
