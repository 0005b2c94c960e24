//! Configuration Loader
//!
//! Environment-aware configuration loading. Reads one YAML file, merges the
//! section named after the active environment over the base settings, then
//! validates the result.

use super::error::{ConfigResult, ConfigurationError};
use super::TaskCoreConfig;
use crate::constants::environments;
use serde_yaml::Value as YamlValue;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const ENV_VAR: &str = "TASK_CORE_ENV";
const FALLBACK_ENV_VAR: &str = "APP_ENV";

/// Loaded configuration together with where it came from
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: TaskCoreConfig,
    environment: String,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration with environment auto-detection
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Arc<ConfigManager>> {
        let environment = Self::detect_environment();
        Self::load_from_path(path, &environment)
    }

    /// Load configuration from a file with an explicit environment.
    /// Useful in tests to avoid touching process-wide environment variables.
    pub fn load_from_path(
        path: impl AsRef<Path>,
        environment: &str,
    ) -> ConfigResult<Arc<ConfigManager>> {
        let path = path.as_ref();
        debug!(
            environment = environment,
            path = %path.display(),
            "Loading task-core configuration"
        );

        if !path.exists() {
            return Err(ConfigurationError::config_file_not_found(path));
        }

        let yaml_content = std::fs::read_to_string(path)
            .map_err(|e| ConfigurationError::file_read_error(path.display().to_string(), e))?;

        let source = path.display().to_string();
        let config = Self::parse_and_merge(&yaml_content, &source, environment)?;
        config.validate()?;

        debug!(config = ?config, "Configuration loaded successfully");

        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_path: Some(path.to_path_buf()),
        }))
    }

    /// Wrap an already-built configuration (no file involved)
    pub fn from_config(
        config: TaskCoreConfig,
        environment: &str,
    ) -> ConfigResult<Arc<ConfigManager>> {
        config.validate()?;
        Ok(Arc::new(ConfigManager {
            config,
            environment: environment.to_string(),
            config_path: None,
        }))
    }

    pub fn config(&self) -> &TaskCoreConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Detect the active environment: `TASK_CORE_ENV`, then `APP_ENV`, then
    /// `development`. Always lowercased.
    pub fn detect_environment() -> String {
        Self::environment_from(|key| env::var(key).ok())
    }

    fn environment_from(lookup: impl Fn(&str) -> Option<String>) -> String {
        lookup(ENV_VAR)
            .or_else(|| lookup(FALLBACK_ENV_VAR))
            .unwrap_or_else(|| environments::DEVELOPMENT.to_string())
            .to_lowercase()
    }

    fn parse_and_merge(
        yaml_content: &str,
        source: &str,
        environment: &str,
    ) -> ConfigResult<TaskCoreConfig> {
        // An empty file means "all defaults"
        let mut yaml_data: YamlValue = if yaml_content.trim().is_empty() {
            YamlValue::Null
        } else {
            serde_yaml::from_str(yaml_content)
                .map_err(|e| ConfigurationError::invalid_yaml(source, e))?
        };

        if yaml_data.is_null() {
            yaml_data = YamlValue::Mapping(Default::default());
        }

        if let Some(env_overrides) = yaml_data
            .get(YamlValue::String(environment.to_string()))
            .cloned()
        {
            debug!(environment = environment, "Applying environment-specific overrides");
            Self::merge_yaml_values(&mut yaml_data, env_overrides);
        }

        if let YamlValue::Mapping(ref mut map) = yaml_data {
            for name in environments::ALL {
                map.remove(YamlValue::String(name.to_string()));
            }
        }

        serde_yaml::from_value(yaml_data).map_err(|e| {
            ConfigurationError::invalid_yaml(
                source,
                format!("Failed to deserialize configuration: {e}"),
            )
        })
    }

    /// Recursively merge YAML values (environment overrides into base config)
    fn merge_yaml_values(base: &mut YamlValue, override_value: YamlValue) {
        match (&mut *base, override_value) {
            (YamlValue::Mapping(base_map), YamlValue::Mapping(override_map)) => {
                for (key, value) in override_map {
                    if let Some(existing_value) = base_map.get_mut(&key) {
                        Self::merge_yaml_values(existing_value, value);
                    } else {
                        base_map.insert(key, value);
                    }
                }
            }
            (base_ref, override_val) => {
                *base_ref = override_val;
            }
        }
    }
}
