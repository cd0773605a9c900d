//! Configuration module for `IaaAnalytics`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Institutional grading rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionConfig {
    /// Class-hours represented by one enrollment credit unit.
    /// Must match the institution's rule exactly; it converts the credit
    /// counts reported by the enrollment mirror into weighted hours.
    #[serde(default = "default_class_hours_per_credit")]
    pub class_hours_per_credit: u32,
}

const fn default_class_hours_per_credit() -> u32 {
    18
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        Self {
            class_hours_per_credit: default_class_hours_per_credit(),
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for student record files
    #[serde(default)]
    pub records_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Institutional grading rules
    #[serde(default)]
    pub institution: InstitutionConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override class-hours-per-credit constant
    pub class_hours_per_credit: Option<u32>,
    /// Override records directory
    pub records_dir: Option<String>,
}

impl Config {
    /// Get the `$IAACALC` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/iaacalc`
    /// - macOS: `~/Library/Application Support/iaacalc`
    /// - Windows: `%APPDATA%\iaacalc`
    #[must_use]
    pub fn get_iaacalc_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("iaacalc")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that newly added fields are
    /// populated with their default values. Only fields that are empty in
    /// the current config and non-empty in defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.institution.class_hours_per_credit == 0
            && defaults.institution.class_hours_per_credit != 0
        {
            self.institution.class_hours_per_credit = defaults.institution.class_hours_per_credit;
            changed = true;
        }

        if self.paths.records_dir.is_empty() && !defaults.paths.records_dir.is_empty() {
            self.paths.records_dir.clone_from(&defaults.paths.records_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// This allows command-line arguments to override configuration file
    /// values without modifying the persistent configuration file. Only
    /// non-`None` values in the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(hours) = overrides.class_hours_per_credit {
            self.institution.class_hours_per_credit = hours;
        }

        if let Some(records_dir) = &overrides.records_dir {
            self.paths.records_dir.clone_from(records_dir);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_iaacalc_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$IAACALC` variable in a string
    ///
    /// Replaces occurrences of `$IAACALC` with the actual iaacalc directory
    /// path, so configuration values can reference the config directory.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$IAACALC") {
            let iaacalc_dir = Self::get_iaacalc_dir();
            value.replace("$IAACALC", iaacalc_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$IAACALC`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.records_dir = Self::expand_variables(&config.paths.records_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// Handles several scenarios:
    /// - Config file exists: loads it, merges missing fields from defaults,
    ///   saves the updated config
    /// - Config file doesn't exist (first run): creates the config directory
    ///   if needed, loads defaults, saves them to file
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `class_hours_per_credit`: Class-hours per enrollment credit
    /// - `records_dir`: Student record search directory
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "class_hours_per_credit" | "class-hours-per-credit" => {
                Some(self.institution.class_hours_per_credit.to_string())
            }
            "records_dir" | "records-dir" => Some(self.paths.records_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Note: updates the in-memory config. Call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., a non-numeric credit-hour constant).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "class_hours_per_credit" | "class-hours-per-credit" => {
                let hours = value.parse::<u32>().map_err(|_| {
                    format!("Invalid value for 'class_hours_per_credit': '{value}'")
                })?;
                if hours == 0 {
                    return Err("'class_hours_per_credit' must be positive".to_string());
                }
                self.institution.class_hours_per_credit = hours;
            }
            "records_dir" | "records-dir" => self.paths.records_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Note: updates the in-memory config. Call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "class_hours_per_credit" | "class-hours-per-credit" => {
                self.institution.class_hours_per_credit =
                    defaults.institution.class_hours_per_credit;
            }
            "records_dir" | "records-dir" => {
                self.paths.records_dir.clone_from(&defaults.paths.records_dir);
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. The CLI
    /// requires user confirmation before calling this.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[institution]")?;
        writeln!(
            f,
            "  class_hours_per_credit = {}",
            self.institution.class_hours_per_credit
        )?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  records_dir = \"{}\"", self.paths.records_dir)?;

        Ok(())
    }
}
