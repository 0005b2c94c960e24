//! The shipped configuration file loads in every environment.

use std::path::PathBuf;
use std::time::Duration;
use task_core::{ConfigManager, ExecutionContext};

fn shipped_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/task-core.yaml")
}

#[test]
fn development_uses_base_values() {
    let manager = ConfigManager::load_from_path(shipped_config(), "development").unwrap();
    assert_eq!(manager.config().execution.job_pause(), Duration::from_secs(1));
    assert_eq!(manager.config().director.poll_timeout(), None);
}

#[test]
fn test_environment_disables_pause() {
    let manager = ConfigManager::load_from_path(shipped_config(), "test").unwrap();
    assert_eq!(manager.config().execution.job_pause_ms, 0);

    let ctx = ExecutionContext::new(manager.config().clone());
    assert!(ctx.config.execution.job_pause().is_zero());
}

#[test]
fn production_bounds_polling() {
    let manager = ConfigManager::load_from_path(shipped_config(), "production").unwrap();
    assert_eq!(
        manager.config().director.poll_timeout(),
        Some(Duration::from_secs(3600))
    );
}
