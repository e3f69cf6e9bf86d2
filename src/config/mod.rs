//! Configuration for the reusable advice.
//!
//! The core registrar needs no configuration. The advice in
//! [`crate::advice`] reads its defaults from a [`Config`] that can be loaded
//! from YAML files or environment variables.

mod advice;

pub use advice::{
    InstrumentationConfig, RetryConfig, DEFAULT_RETRY_MAX_DELAY_MS, DEFAULT_RETRY_MAX_TIMES,
    DEFAULT_RETRY_MIN_DELAY_MS, DEFAULT_SLOW_CALL_THRESHOLD_MS,
};

use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "around.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "AROUND_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "AROUND";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "AROUND_LOG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backoff for retry advice.
    pub retry: RetryConfig,
    /// Thresholds for instrumentation advice.
    pub instrumentation: InstrumentationConfig,
}

impl Config {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `around.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, sections
    ///    separated by `__` (e.g. `AROUND__RETRY__MAX_TIMES=5`)
    pub fn load(path: Option<&str>) -> Result<Self, ::config::ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Parse configuration from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ::config::ConfigError> {
        use ::config::{Config as ConfigLib, File, FileFormat};

        ConfigLib::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    /// Create config for testing: retries without sleeping.
    pub fn for_test() -> Self {
        Self {
            retry: RetryConfig::immediate(DEFAULT_RETRY_MAX_TIMES),
            ..Default::default()
        }
    }
}
