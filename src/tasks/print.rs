//! Driver that emits a message for every host and always succeeds.

use super::{ExecutionContext, Task, TaskBase};
use crate::error::TaskCoreResult;
use crate::models::TaskResult;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct PrintTask {
    base: TaskBase,
}

impl PrintTask {
    pub fn new(base: TaskBase) -> Self {
        Self { base }
    }

    pub(crate) fn construct(base: TaskBase, _ctx: &ExecutionContext) -> Box<dyn Task> {
        Box::new(Self::new(base))
    }

    /// Message emitted per host; empty when the definition carries none
    pub fn message(&self) -> &str {
        self.data().message().unwrap_or_default()
    }
}

#[async_trait]
impl Task for PrintTask {
    fn base(&self) -> &TaskBase {
        &self.base
    }

    /// Print tasks carry a message instead of jobs
    fn jobs(&self) -> &[Value] {
        &[]
    }

    #[instrument(
        skip(self),
        fields(service = %self.service(), task_id = ?self.task_id().ok())
    )]
    async fn execute(&self) -> TaskCoreResult<Vec<TaskResult>> {
        info!(hosts = self.hosts().len(), "Executing print task");

        let results: Vec<TaskResult> = self
            .hosts()
            .iter()
            .map(|host| {
                info!(host = %host, "{}", self.message());
                TaskResult::success(host.as_str(), json!({}))
            })
            .collect();

        info!(hosts = results.len(), status = true, "Print task finished");
        Ok(results)
    }
}
