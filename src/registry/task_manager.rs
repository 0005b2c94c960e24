//! # TaskManager
//!
//! Process-wide entry point for driver resolution. Exactly one manager exists
//! per process; its registry is built on first access and never rebuilt.

use super::driver_registry::{DriverEntry, DriverRegistry};
use crate::error::{TaskCoreError, TaskCoreResult};
use crate::logging::log_task_operation;
use crate::models::TaskDefinition;
use crate::tasks::{ExecutionContext, Task, TaskBase};
use std::sync::OnceLock;
use tracing::info;

static INSTANCE: OnceLock<TaskManager> = OnceLock::new();

#[derive(Debug)]
pub struct TaskManager {
    registry: DriverRegistry,
}

impl TaskManager {
    fn new(registry: DriverRegistry) -> Self {
        info!(drivers = ?registry.names(), "Initializing TaskManager");
        Self { registry }
    }

    /// Return the singleton, creating it with the built-in drivers if needed.
    ///
    /// Concurrent first callers all observe the same instance.
    pub fn instance() -> &'static TaskManager {
        INSTANCE.get_or_init(|| Self::new(DriverRegistry::builtin()))
    }

    /// Create the singleton with an explicit registry.
    ///
    /// Fails with [`TaskCoreError::ConfigurationError`] once an instance exists,
    /// whether it came from an earlier `initialize` or from [`Self::instance`].
    pub fn initialize(registry: DriverRegistry) -> TaskCoreResult<&'static TaskManager> {
        if Self::is_initialized() {
            return Err(Self::already_initialized());
        }
        // a concurrent first caller can still win between the check and the set
        INSTANCE
            .set(Self::new(registry))
            .map_err(|_| Self::already_initialized())?;
        Ok(Self::instance())
    }

    fn already_initialized() -> TaskCoreError {
        TaskCoreError::ConfigurationError("TaskManager singleton already initialized".to_string())
    }

    pub fn is_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// Resolve a driver by name
    pub fn get_driver(&self, name: &str) -> TaskCoreResult<&DriverEntry> {
        self.registry.get(name)
    }

    pub fn driver_names(&self) -> Vec<String> {
        self.registry.names()
    }

    /// Resolve the definition's driver and construct it for the given hosts
    pub fn create_task(
        &self,
        service: &str,
        definition: TaskDefinition,
        hosts: Vec<String>,
        ctx: &ExecutionContext,
    ) -> TaskCoreResult<Box<dyn Task>> {
        let entry = self.get_driver(definition.driver())?;
        let task_id = definition.task_id().ok();
        log_task_operation(
            "create_task",
            service,
            task_id.as_deref(),
            entry.name(),
            hosts.len(),
            None,
        );
        Ok(entry.build(TaskBase::new(service, definition, hosts), ctx))
    }
}
