//! Configuration Loader
//!
//! Layers sources in increasing precedence: built-in defaults, `publication.toml`,
//! `publication.<environment>.toml`, then `PUBLICATION__SECTION__KEY` environment variables.
//! Both files are optional.

use ::config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{ConfigResult, ConfigurationError};
use super::EngineConfig;
use crate::constants::defaults;

/// Detect the runtime environment name
pub fn detect_environment() -> String {
    env::var("PUBLICATION_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| defaults::ENVIRONMENT.to_string())
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    directory: PathBuf,
    environment: String,
    read_env_vars: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            directory: PathBuf::from(defaults::CONFIG_DIRECTORY),
            environment: detect_environment(),
            read_env_vars: true,
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Use an explicit environment instead of the detected one.
    /// Useful for testing without modifying global environment variables.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Skip the environment variable layer
    pub fn without_env_vars(mut self) -> Self {
        self.read_env_vars = false;
        self
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn load(&self) -> ConfigResult<EngineConfig> {
        let base = self.file_path(None);
        let overlay = self.file_path(Some(&self.environment));

        debug!(
            environment = %self.environment,
            base = %base.display(),
            overlay = %overlay.display(),
            "Loading publication engine configuration"
        );

        let mut builder = Config::builder()
            .add_source(File::from(base.as_path()).required(false))
            .add_source(File::from(overlay.as_path()).required(false));

        if self.read_env_vars {
            builder = builder.add_source(
                Environment::with_prefix(defaults::ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let settings = builder.build().map_err(|e| ConfigurationError::LoadFailed {
            directory: self.directory.clone(),
            reason: e.to_string(),
        })?;

        let config: EngineConfig = settings
            .try_deserialize()
            .map_err(|e| ConfigurationError::Deserialization(e.to_string()))?;

        config.validate()?;

        debug!(
            environment = %self.environment,
            resolve_rejected_requests = config.bulk.resolve_rejected_requests,
            default_branch = %config.branches.default_branch,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    fn file_path(&self, environment: Option<&str>) -> PathBuf {
        let name = match environment {
            Some(env) => format!("{}.{env}.toml", defaults::CONFIG_BASENAME),
            None => format!("{}.toml", defaults::CONFIG_BASENAME),
        };
        Path::new(&self.directory).join(name)
    }
}
