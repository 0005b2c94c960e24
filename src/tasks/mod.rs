//! # Task Drivers
//!
//! A driver turns a [`TaskDefinition`] plus an ordered host list into one
//! [`TaskResult`] per host. All drivers share the [`Task`] capability and are
//! constructed through the driver registry.
//!
//! ## Contract
//!
//! - `execute()` returns exactly `hosts().len()` results, in host order.
//! - Work that runs and fails is reported as `status == false`, never as `Err`.
//! - `Err` is reserved for API failures (engine transport, runner spawn,
//!   malformed definitions read through derived properties).

pub mod director_service;
pub mod print;
pub mod service;

pub use director_service::DirectorServiceTask;
pub use print::PrintTask;
pub use service::ServiceTask;

use crate::config::TaskCoreConfig;
use crate::engine::{OrchestrationEngine, UnconfiguredEngine};
use crate::error::TaskCoreResult;
use crate::models::{TaskDefinition, TaskResult};
use crate::runner::{CommandRunner, LocalCommandRunner};
use async_trait::async_trait;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// State every driver is constructed from
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBase {
    service: String,
    data: TaskDefinition,
    hosts: Vec<String>,
}

impl TaskBase {
    pub fn new(service: impl Into<String>, data: TaskDefinition, hosts: Vec<String>) -> Self {
        Self {
            service: service.into(),
            data,
            hosts,
        }
    }
}

/// Shared capability of all task drivers
#[async_trait]
pub trait Task: Send + Sync + fmt::Debug {
    fn base(&self) -> &TaskBase;

    /// Owning service name
    fn service(&self) -> &str {
        &self.base().service
    }

    fn data(&self) -> &TaskDefinition {
        &self.base().data
    }

    /// Target hosts, in request order; duplicates are kept
    fn hosts(&self) -> &[String] {
        &self.base().hosts
    }

    fn task_id(&self) -> TaskCoreResult<Cow<'_, str>> {
        self.data().task_id()
    }

    fn action(&self) -> Option<&str> {
        self.data().action()
    }

    fn jobs(&self) -> &[Value] {
        self.data().jobs()
    }

    async fn execute(&self) -> TaskCoreResult<Vec<TaskResult>>;
}

/// Collaborators handed to drivers at construction time
#[derive(Clone)]
pub struct ExecutionContext {
    pub config: TaskCoreConfig,
    pub runner: Arc<dyn CommandRunner>,
    pub engine: Arc<dyn OrchestrationEngine>,
}

impl ExecutionContext {
    /// Local runner and no orchestration engine
    pub fn new(config: TaskCoreConfig) -> Self {
        Self {
            config,
            runner: Arc::new(LocalCommandRunner::new()),
            engine: Arc::new(UnconfiguredEngine),
        }
    }

    #[must_use]
    pub fn with_runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: Arc<dyn OrchestrationEngine>) -> Self {
        self.engine = engine;
        self
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(TaskCoreConfig::default())
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("config", &self.config)
            .field("runner", &"dyn CommandRunner")
            .field("engine", &"dyn OrchestrationEngine")
            .finish()
    }
}
