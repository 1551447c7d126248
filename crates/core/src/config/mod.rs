//! Configuration file loading.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, LOG_LEVEL_ENV, default_config_path};
pub use types::{LoggingConfig, ResolvedConfig};
