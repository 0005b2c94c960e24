#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use task_core::runner::RunnerError;
use task_core::{CommandRunner, JobOutcome, JobSpec};

/// Command runner double: records (host, kind) pairs, answers from a script
#[derive(Debug, Default)]
pub struct MockRunner {
    outcomes: HashMap<String, JobOutcome>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every job of `kind` completes with the given success flag
    pub fn with_outcome(mut self, kind: &str, success: bool, output: &str) -> Self {
        self.outcomes.insert(
            kind.to_string(),
            JobOutcome::Completed {
                success,
                output: output.to_string(),
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, host: &str, job: &JobSpec) -> Result<JobOutcome, RunnerError> {
        self.calls
            .lock()
            .unwrap()
            .push((host.to_string(), job.kind.clone()));
        Ok(self.outcomes.get(&job.kind).cloned().unwrap_or(JobOutcome::Skipped {
            reason: format!("unscripted kind '{}'", job.kind),
        }))
    }
}
