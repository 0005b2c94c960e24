//! # ServiceTask
//!
//! Runs each job of the definition, in order, for each host through a
//! [`CommandRunner`]. Hosts are processed one after another and jobs are
//! separated by a fixed pause.
//!
//! A job entry that cannot be parsed, or whose kind the runner does not
//! recognise, is skipped: it is recorded in the payload and does not fail the
//! host. A recognised job that runs and fails marks that host `status = false`.

use super::{ExecutionContext, Task, TaskBase};
use crate::error::TaskCoreResult;
use crate::models::{JobSpec, TaskResult};
use crate::runner::{CommandRunner, JobOutcome};
use async_trait::async_trait;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

pub struct ServiceTask {
    base: TaskBase,
    runner: Arc<dyn CommandRunner>,
    job_pause: Duration,
}

impl ServiceTask {
    pub fn new(base: TaskBase, runner: Arc<dyn CommandRunner>, job_pause: Duration) -> Self {
        Self {
            base,
            runner,
            job_pause,
        }
    }

    pub(crate) fn construct(base: TaskBase, ctx: &ExecutionContext) -> Box<dyn Task> {
        Box::new(Self::new(
            base,
            ctx.runner.clone(),
            ctx.config.execution.job_pause(),
        ))
    }

    async fn run_host(&self, host: &str) -> TaskCoreResult<TaskResult> {
        let mut records = Vec::with_capacity(self.jobs().len());
        let mut failed = false;

        for (index, entry) in self.jobs().iter().enumerate() {
            if index > 0 && !self.job_pause.is_zero() {
                tokio::time::sleep(self.job_pause).await;
            }

            let job = match JobSpec::from_value(entry) {
                Ok(job) => job,
                Err(e) => {
                    warn!(host = host, error = %e, "Skipping malformed job entry");
                    records.push(json!({"entry": entry, "skipped": true, "reason": e.to_string()}));
                    continue;
                }
            };

            let outcome = self.runner.run(host, &job).await?;
            if outcome.is_failure() {
                warn!(host = host, kind = %job.kind, "Job failed");
                failed = true;
            }
            if let JobOutcome::Completed { success, .. } = &outcome {
                debug!(host = host, kind = %job.kind, success = success, "Job finished");
            }
            records.push(outcome.to_record(&job.kind));
        }

        Ok(TaskResult::new(host, !failed, json!({ "jobs": records })))
    }
}

#[async_trait]
impl Task for ServiceTask {
    fn base(&self) -> &TaskBase {
        &self.base
    }

    #[instrument(
        skip(self),
        fields(service = %self.service(), task_id = ?self.task_id().ok())
    )]
    async fn execute(&self) -> TaskCoreResult<Vec<TaskResult>> {
        info!(
            hosts = self.hosts().len(),
            jobs = self.jobs().len(),
            "Executing service task"
        );

        let mut results = Vec::with_capacity(self.hosts().len());
        for host in self.hosts() {
            results.push(self.run_host(host).await?);
        }

        info!(
            hosts = results.len(),
            status = TaskResult::all_succeeded(&results),
            "Service task finished"
        );
        Ok(results)
    }
}

impl fmt::Debug for ServiceTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceTask")
            .field("base", &self.base)
            .field("runner", &"dyn CommandRunner")
            .field("job_pause", &self.job_pause)
            .finish()
    }
}
