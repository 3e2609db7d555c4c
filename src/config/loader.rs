//! Configuration file loading with precedence handling.

use crate::state::SearchSettings;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "BSVIZ_CONFIG";
/// Environment variable overriding the auto-play delay in milliseconds.
pub const ENV_DELAY_MS: &str = "BSVIZ_DELAY_MS";
/// Environment variable overriding the default random length.
pub const ENV_RANDOM_LENGTH: &str = "BSVIZ_RANDOM_LENGTH";

/// Smallest accepted auto-play delay, from any source.
pub const MIN_AUTOPLAY_DELAY_MS: u64 = 1;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Config file parsed but holds a value outside its allowed range.
    #[error("Invalid value in {path}: {reason}")]
    InvalidValue {
        /// Path with the bad value.
        path: PathBuf,
        /// Which key and why.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/bsviz/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pause between auto-play steps in milliseconds.
    #[serde(default)]
    pub autoplay_delay_ms: Option<u64>,

    /// Default value of the random length field.
    #[serde(default)]
    pub random_length: Option<usize>,

    /// Smallest value range used for random arrays.
    #[serde(default)]
    pub min_value_range: Option<usize>,

    /// Random value range grows as `length * value_range_factor`.
    #[serde(default)]
    pub value_range_factor: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Auto-play delay in milliseconds.
    pub autoplay_delay_ms: u64,
    /// Default random length.
    pub random_length: usize,
    /// Smallest random value range.
    pub min_value_range: usize,
    /// Random value range growth factor.
    pub value_range_factor: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: 800,
            random_length: 10,
            min_value_range: 100,
            value_range_factor: 2,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Tunables handed to the state layer.
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            autoplay_delay: Duration::from_millis(self.autoplay_delay_ms),
            random_length: self.random_length,
            min_value_range: self.min_value_range,
            value_range_factor: self.value_range_factor,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/bsviz/bsviz.log` on Linux, or the platform
/// equivalent. Falls back to `bsviz.log` in the current directory when
/// no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("bsviz").join("bsviz.log")
    } else {
        PathBuf::from("bsviz.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    config
        .validate()
        .map_err(|reason| ConfigError::InvalidValue {
            path: path.clone(),
            reason,
        })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/bsviz/config.toml` on Linux).
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bsviz").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `BSVIZ_CONFIG` environment variable
/// 3. Default path `~/.config/bsviz/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        autoplay_delay_ms: config
            .autoplay_delay_ms
            .unwrap_or(defaults.autoplay_delay_ms),
        random_length: config.random_length.unwrap_or(defaults.random_length),
        min_value_range: config.min_value_range.unwrap_or(defaults.min_value_range),
        value_range_factor: config
            .value_range_factor
            .unwrap_or(defaults.value_range_factor),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `BSVIZ_DELAY_MS`: Override auto-play delay
/// - `BSVIZ_RANDOM_LENGTH`: Override default random length
///
/// Values that do not parse, and delays below [`MIN_AUTOPLAY_DELAY_MS`],
/// are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(delay) =
        env_parse::<u64>(ENV_DELAY_MS).filter(|&delay| delay >= MIN_AUTOPLAY_DELAY_MS)
    {
        config.autoplay_delay_ms = delay;
    }

    if let Some(length) = env_parse::<usize>(ENV_RANDOM_LENGTH) {
        config.random_length = length;
    }

    config
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    delay_override: Option<u64>,
    random_length_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(delay) = delay_override {
        config.autoplay_delay_ms = delay;
    }

    if let Some(length) = random_length_override {
        config.random_length = length;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
