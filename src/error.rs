//! Error types for the task-core system.
//!
//! Two propagation paths exist and must not be mixed:
//!
//! - **API failures** (unknown driver, double singleton initialisation, a
//!   broken engine transport) are returned as [`TaskCoreError`].
//! - **Job failures** (work that ran and did not succeed) are data: they end up
//!   in a [`TaskResult`](crate::models::TaskResult) with `status == false`.

use crate::config::ConfigurationError as ConfigLoadError;
use crate::engine::EngineError;
use crate::runner::RunnerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskCoreError {
    /// Programmer error, e.g. constructing the `TaskManager` singleton twice.
    /// Unrelated to reading the config file, see [`TaskCoreError::Config`].
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// No driver is registered under the requested name
    #[error("No driver registered under '{name}' (available: {available:?})")]
    DriverNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Driver '{0}' is already registered")]
    DuplicateDriver(String),

    /// Raised lazily when a derived property of a task definition is read
    #[error("Invalid task definition field '{field}': {reason}")]
    InvalidDefinition { field: String, reason: String },

    #[error("Orchestration engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Command runner error: {0}")]
    Runner(#[from] RunnerError),

    /// The YAML config file could not be read, parsed or validated
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Failed to parse task definition YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaskCoreError {
    pub fn invalid_definition(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True when the error means "the task definition names an unknown driver"
    pub fn is_driver_not_found(&self) -> bool {
        matches!(self, Self::DriverNotFound { .. })
    }
}

pub type TaskCoreResult<T> = std::result::Result<T, TaskCoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_not_found_is_distinguishable() {
        let err = TaskCoreError::DriverNotFound {
            name: "doesnotexist".to_string(),
            available: vec!["print".to_string()],
        };
        assert!(err.is_driver_not_found());
        assert!(err.to_string().contains("doesnotexist"));

        let other = TaskCoreError::ConfigurationError("already initialized".to_string());
        assert!(!other.is_driver_not_found());
    }

    #[test]
    fn config_file_errors_are_not_singleton_errors() {
        let err: TaskCoreError =
            ConfigLoadError::config_file_not_found("/etc/task-core.yaml").into();
        assert!(matches!(err, TaskCoreError::Config(_)));
        assert!(err.to_string().starts_with("Failed to load configuration"));
    }

    #[test]
    fn engine_errors_convert() {
        let err: TaskCoreError = EngineError::Transport("connection refused".to_string()).into();
        assert!(matches!(err, TaskCoreError::Engine(_)));
        assert_eq!(
            err.to_string(),
            "Orchestration engine error: Engine transport failure: connection refused"
        );
    }
}
