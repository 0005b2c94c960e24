//! # task-core Configuration
//!
//! YAML-backed configuration for the task drivers. A single file holds the base
//! settings plus optional per-environment sections (`development`, `test`,
//! `production`) that are merged over the base at load time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use task_core::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load_from_path("config/task-core.yaml", "test")?;
//! let pause = manager.config().execution.job_pause();
//! # let _ = pause;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use crate::constants::{DEFAULT_JOB_PAUSE_MS, FALLBACK_EXEC_USER, MAX_JOB_PAUSE_MS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigManager;

/// Root configuration structure mirroring task-core.yaml
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TaskCoreConfig {
    /// Local job execution settings (ServiceTask)
    pub execution: ExecutionConfig,

    /// Orchestration engine settings (DirectorServiceTask)
    pub director: DirectorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Pause between consecutive job steps, in milliseconds
    pub job_pause_ms: u64,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            job_pause_ms: DEFAULT_JOB_PAUSE_MS,
        }
    }
}

impl ExecutionConfig {
    pub fn job_pause(&self) -> Duration {
        Duration::from_millis(self.job_pause_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DirectorConfig {
    /// Identity submitted along with orchestrations. Falls back to `$USER`.
    pub exec_user: Option<String>,

    /// Upper bound for a single poll. `None` blocks until the engine returns a verdict.
    pub poll_timeout_seconds: Option<u64>,
}

impl DirectorConfig {
    pub fn resolved_exec_user(&self) -> String {
        self.exec_user
            .clone()
            .or_else(|| std::env::var("USER").ok())
            .filter(|user| !user.is_empty())
            .unwrap_or_else(|| FALLBACK_EXEC_USER.to_string())
    }

    pub fn poll_timeout(&self) -> Option<Duration> {
        self.poll_timeout_seconds.map(Duration::from_secs)
    }
}

impl TaskCoreConfig {
    /// Configuration suited to tests: no pause between job steps
    pub fn for_testing() -> Self {
        Self {
            execution: ExecutionConfig { job_pause_ms: 0 },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.execution.job_pause_ms > MAX_JOB_PAUSE_MS {
            return Err(ConfigurationError::invalid_value(
                "execution.job_pause_ms",
                self.execution.job_pause_ms.to_string(),
                format!("pause must not exceed {MAX_JOB_PAUSE_MS}ms"),
            ));
        }

        if self.director.poll_timeout_seconds == Some(0) {
            return Err(ConfigurationError::invalid_value(
                "director.poll_timeout_seconds",
                "0",
                "timeout must be greater than 0 when set",
            ));
        }

        Ok(())
    }
}
