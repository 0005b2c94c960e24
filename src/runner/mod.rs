//! # Command Runner
//!
//! Executes individual job steps for `ServiceTask`. A runner reports the
//! outcome of each job as data; only failures to run anything at all come back
//! as [`RunnerError`].

use crate::constants::job_kinds;
use crate::models::JobSpec;
use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("Failed to spawn job '{kind}' for host {host}: {reason}")]
    Spawn {
        host: String,
        kind: String,
        reason: String,
    },
}

/// What happened to one job on one host
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// The job kind was recognised and ran
    Completed { success: bool, output: String },
    /// The job kind was not recognised and nothing ran
    Skipped { reason: String },
}

impl JobOutcome {
    /// Skipped jobs never count as failures
    pub fn is_failure(&self) -> bool {
        matches!(self, JobOutcome::Completed { success: false, .. })
    }

    /// Result-payload record for this outcome
    pub fn to_record(&self, kind: &str) -> Value {
        match self {
            JobOutcome::Completed { success, output } => json!({
                "kind": kind,
                "success": success,
                "output": output,
            }),
            JobOutcome::Skipped { reason } => json!({
                "kind": kind,
                "skipped": true,
                "reason": reason,
            }),
        }
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, host: &str, job: &JobSpec) -> Result<JobOutcome, RunnerError>;
}

/// Runs recognised job kinds on the local machine.
///
/// - `echo`: records the body as the job output
/// - `run` / `RUN`: runs the body with `sh -c`, exposing the target host as
///   `TASK_CORE_HOST`
#[derive(Debug, Default, Clone)]
pub struct LocalCommandRunner;

impl LocalCommandRunner {
    pub fn new() -> Self {
        Self
    }

    async fn run_shell(&self, host: &str, job: &JobSpec) -> Result<JobOutcome, RunnerError> {
        let command = job.body_text();
        debug!(host = host, command = %command, "Running shell job");

        let output = tokio::process::Command::new("sh")
            .arg("-c")
            .arg(&command)
            .env("TASK_CORE_HOST", host)
            .output()
            .await
            .map_err(|e| RunnerError::Spawn {
                host: host.to_string(),
                kind: job.kind.clone(),
                reason: e.to_string(),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        Ok(JobOutcome::Completed {
            success: output.status.success(),
            output: text,
        })
    }
}

#[async_trait]
impl CommandRunner for LocalCommandRunner {
    async fn run(&self, host: &str, job: &JobSpec) -> Result<JobOutcome, RunnerError> {
        match job.kind.as_str() {
            job_kinds::ECHO => {
                let output = job.body_text();
                info!(host = host, output = %output, "echo");
                Ok(JobOutcome::Completed {
                    success: true,
                    output,
                })
            }
            job_kinds::RUN | job_kinds::RUN_UPPER => self.run_shell(host, job).await,
            other => {
                warn!(host = host, kind = other, "Ignoring unrecognized job kind");
                Ok(JobOutcome::Skipped {
                    reason: format!("unrecognized job kind '{other}'"),
                })
            }
        }
    }
}
