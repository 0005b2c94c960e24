//! # Structured Logging Module
//!
//! Environment-aware console logging built on `tracing`. Log level comes from
//! `RUST_LOG` when set, otherwise from the detected environment.

use crate::config::ConfigManager;
use crate::constants::environments;
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with environment-specific configuration
pub fn init_structured_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = ConfigManager::detect_environment();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level(&environment)));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_filter(filter),
        );

        // A global subscriber may already be installed by the host application
        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - keeping it");
        }

        tracing::info!(environment = %environment, "Structured logging initialized");
    });
}

/// Get log level based on environment
fn default_log_level(environment: &str) -> &'static str {
    match environment {
        environments::PRODUCTION => "info",
        _ => "debug",
    }
}

/// Log structured data for task operations
pub fn log_task_operation(
    operation: &str,
    service: &str,
    task_id: Option<&str>,
    driver: &str,
    host_count: usize,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        service = %service,
        task_id = task_id,
        driver = %driver,
        host_count = host_count,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "TASK_OPERATION"
    );
}
