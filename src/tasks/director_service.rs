//! # DirectorServiceTask
//!
//! Delegates a task to the external orchestration engine: one submission for
//! the whole host batch, then a poll per returned job until a terminal verdict.
//!
//! The engine only reports an aggregate verdict, so every host receives the
//! same status and the same payload. Nothing is retried here; retry policy
//! belongs to the engine.

use super::{ExecutionContext, Task, TaskBase};
use crate::engine::{EngineError, JobId, JobVerdict, OrchestrationEngine, OrchestrationRequest};
use crate::error::TaskCoreResult;
use crate::models::TaskResult;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

pub struct DirectorServiceTask {
    base: TaskBase,
    engine: Arc<dyn OrchestrationEngine>,
    exec_user: String,
    poll_timeout: Option<Duration>,
}

impl DirectorServiceTask {
    pub fn new(
        base: TaskBase,
        engine: Arc<dyn OrchestrationEngine>,
        exec_user: impl Into<String>,
    ) -> Self {
        Self {
            base,
            engine,
            exec_user: exec_user.into(),
            poll_timeout: None,
        }
    }

    /// Bound each poll; without it a hung engine blocks the caller indefinitely
    #[must_use]
    pub fn with_poll_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.poll_timeout = timeout;
        self
    }

    pub(crate) fn construct(base: TaskBase, ctx: &ExecutionContext) -> Box<dyn Task> {
        let director = &ctx.config.director;
        Box::new(
            Self::new(base, ctx.engine.clone(), director.resolved_exec_user())
                .with_poll_timeout(director.poll_timeout()),
        )
    }

    pub fn exec_user(&self) -> &str {
        &self.exec_user
    }

    fn orchestration_request(&self) -> OrchestrationRequest {
        OrchestrationRequest {
            user_exec: self.exec_user.clone(),
            orchestrations: self.jobs().to_vec(),
            defined_targets: self.hosts().to_vec(),
            raw_return: true,
        }
    }

    async fn poll_job(&self, job_id: &JobId) -> Result<JobVerdict, EngineError> {
        match self.poll_timeout {
            Some(timeout) => tokio::time::timeout(timeout, self.engine.poll(job_id))
                .await
                .map_err(|_| EngineError::PollTimeout {
                    job_id: job_id.clone(),
                    timeout,
                })?,
            None => self.engine.poll(job_id).await,
        }
    }
}

#[async_trait]
impl Task for DirectorServiceTask {
    fn base(&self) -> &TaskBase {
        &self.base
    }

    #[instrument(
        skip(self),
        fields(service = %self.service(), task_id = ?self.task_id().ok())
    )]
    async fn execute(&self) -> TaskCoreResult<Vec<TaskResult>> {
        // Never submit an empty target list
        if self.hosts().is_empty() {
            debug!("No hosts to target, skipping submission");
            return Ok(Vec::new());
        }

        let job_ids = self.engine.submit(self.orchestration_request()).await?;
        if job_ids.is_empty() {
            return Err(EngineError::NoJobsReturned.into());
        }
        info!(
            job_ids = ?job_ids,
            targets = self.hosts().len(),
            "Orchestration submitted"
        );

        let mut verdict = JobVerdict::succeeded(Value::Null);
        for job_id in &job_ids {
            verdict = self.poll_job(job_id).await?;
            debug!(job_id = %job_id, success = verdict.success, "Job finished");
            if !verdict.success {
                error!(job_id = %job_id, detail = %verdict.detail, "Orchestration failed");
                break;
            }
        }

        let data = json!({
            "job_ids": job_ids,
            "detail": verdict.detail,
        });
        let results: Vec<TaskResult> = self
            .hosts()
            .iter()
            .map(|host| TaskResult::new(host.as_str(), verdict.success, data.clone()))
            .collect();

        info!(
            hosts = results.len(),
            status = verdict.success,
            "Director service task finished"
        );
        Ok(results)
    }
}

impl fmt::Debug for DirectorServiceTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectorServiceTask")
            .field("base", &self.base)
            .field("engine", &"dyn OrchestrationEngine")
            .field("exec_user", &self.exec_user)
            .field("poll_timeout", &self.poll_timeout)
            .finish()
    }
}
