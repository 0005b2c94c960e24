#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # task-core
//!
//! Pluggable task-execution layer. A catalog of named task drivers turns a
//! declarative task definition (id, action, provides/requires, jobs) into one
//! [`TaskResult`] per target host.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► TaskManager::instance()
//!              └── get_driver(definition.driver())
//!                    └── DriverEntry::build(TaskBase, ExecutionContext)
//!                          └── Task::execute() ──► Vec<TaskResult> (one per host)
//! ```
//!
//! Drivers:
//!
//! - [`PrintTask`](tasks::PrintTask) emits a message and always succeeds
//! - [`ServiceTask`](tasks::ServiceTask) runs jobs per host through a
//!   [`CommandRunner`](runner::CommandRunner)
//! - [`DirectorServiceTask`](tasks::DirectorServiceTask) submits all jobs to an
//!   [`OrchestrationEngine`](engine::OrchestrationEngine) and fans the verdict
//!   out to every host
//!
//! ## Quick Start
//!
//! ```rust
//! use task_core::{ExecutionContext, TaskCoreConfig, TaskDefinition, TaskManager};
//!
//! # tokio_test::block_on(async {
//! let definition = TaskDefinition::from_yaml_str(
//!     "id: print\ndriver: print\nmessage: hello\n",
//! ).unwrap();
//! let ctx = ExecutionContext::new(TaskCoreConfig::for_testing());
//!
//! let task = TaskManager::instance()
//!     .create_task("svc", definition, vec!["host-a".into()], &ctx)
//!     .unwrap();
//! let results = task.execute().await.unwrap();
//! assert!(results[0].status());
//! # });
//! ```

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod runner;
pub mod tasks;

pub use config::{ConfigManager, TaskCoreConfig};
pub use engine::{EngineError, JobId, JobVerdict, OrchestrationEngine, OrchestrationRequest};
pub use error::{TaskCoreError, TaskCoreResult};
pub use models::{JobSpec, TaskDefinition, TaskResult};
pub use registry::{DriverKind, DriverRegistry, TaskManager};
pub use runner::{CommandRunner, JobOutcome, LocalCommandRunner};
pub use tasks::{DirectorServiceTask, ExecutionContext, PrintTask, ServiceTask, Task, TaskBase};
