//! Application configuration.
//!
//! Loaded from YAML files and environment variables with the `config`
//! crate. Only the perf harness is configurable; the containers themselves
//! take everything they need as arguments.

mod perf;

pub use perf::{Bench, PerfConfig};

use ::config::{Config as ConfigLib, Environment, File, FileFormat};
use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "rbkit.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "RBKIT_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "RBKIT";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "RBKIT_LOG";

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Benchmark harness settings.
    pub perf: PerfConfig,
}

impl Config {
    /// Load and validate configuration from files and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `rbkit.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix, e.g.
    ///    `RBKIT__PERF__NODES=5000`
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok();
        Self::load_from(path, env_path.as_deref(), environment())
    }

    fn load_from(
        path: Option<&str>,
        env_path: Option<&str>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Some(config_path) = env_path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        let config: Config = builder.add_source(env).build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the harness cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.perf.validate()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(CONFIG_ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("perf.benches")
        .try_parsing(true)
}
