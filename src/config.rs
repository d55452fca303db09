// Configuration loading and parsing (recap.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// recap.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire recap.toml file. Every section
/// is optional; missing sections fall back to defaults.
#[derive(Debug, Clone, Deserialize, Default)]
struct RecapFile {
    #[serde(default)]
    log: LogSection,
    #[serde(default)]
    simulation: SimulationSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Debug, Clone, Deserialize)]
struct LogSection {
    #[serde(default = "default_log_filter")]
    filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        LogSection {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "gridiron_recap=info,warn".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct SimulationSection {
    #[serde(default = "default_week")]
    default_week: u32,
}

impl Default for SimulationSection {
    fn default() -> Self {
        SimulationSection {
            default_week: default_week(),
        }
    }
}

fn default_week() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Default)]
struct OutputSection {
    /// Directory for JSON snapshot dumps. When unset, no snapshot is written.
    snapshot_dir: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub log_filter: String,
    pub default_week: u32,
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: default_log_filter(),
            default_week: default_week(),
            snapshot_dir: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `recap.toml` under `base_dir`. A missing file is
/// not an error; the defaults cover every field.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("recap.toml");

    let file: RecapFile = if path.exists() {
        let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?
    } else {
        RecapFile::default()
    };

    let config = Config {
        log_filter: file.log.filter,
        default_week: file.simulation.default_week,
        snapshot_dir: file.output.snapshot_dir,
    };

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::ReadError {
        path: PathBuf::from("."),
        source: e,
    })?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.default_week == 0 || config.default_week > 18 {
        return Err(ConfigError::ValidationError {
            field: "simulation.default_week".into(),
            message: format!("must be between 1 and 18, got {}", config.default_week),
        });
    }

    if config.log_filter.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "log.filter".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
