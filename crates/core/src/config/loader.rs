use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "TOKENPARSER_LOG_LEVEL";

const KNOWN_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// An explicit `config_path` must exist. When no path is given the default
    /// location is tried and, if absent, built-in defaults are used.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        let resolved = if path.exists() {
            Self::load_file(&path)?
        } else if config_path.is_some() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            ResolvedConfig::default()
        };

        Ok(apply_level_override(resolved, env::var(LOG_LEVEL_ENV).ok().as_deref()))
    }

    fn load_file(path: &Path) -> Result<ResolvedConfig, ConfigError> {
        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let logging = Self::resolve_logging(&cf.logging)?;

        Ok(ResolvedConfig { source: Some(path.to_path_buf()), logging })
    }

    fn resolve_logging(log_cfg: &LoggingConfig) -> Result<LoggingConfig, ConfigError> {
        // Resolve log file path if present
        let file = match log_cfg.file {
            Some(ref file) => Some(expand_path(&file.to_string_lossy())?),
            None => None,
        };

        Ok(LoggingConfig {
            level: log_cfg.level.clone(),
            file_level: log_cfg.file_level.clone(),
            file,
        })
    }
}

/// Replace the configured stderr level with `level` when it names a known level.
///
/// `silent` is accepted as an alias of `off`.
#[must_use]
pub fn apply_level_override(mut cfg: ResolvedConfig, level: Option<&str>) -> ResolvedConfig {
    let Some(level) = level else {
        return cfg;
    };

    let normalised = match level.trim().to_lowercase().as_str() {
        "silent" => "off".to_string(),
        other => other.to_string(),
    };

    if KNOWN_LEVELS.contains(&normalised.as_str()) {
        cfg.logging.level = normalised;
    } else {
        debug!(level, "ignoring unknown {LOG_LEVEL_ENV} value");
    }
    cfg
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("tokenparser").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("tokenparser").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
