#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use task_core::{EngineError, JobId, JobVerdict, OrchestrationEngine, OrchestrationRequest};

/// Orchestration engine double that records every call and replays scripted answers
#[derive(Debug)]
pub struct MockEngine {
    job_ids: Vec<JobId>,
    verdicts: HashMap<JobId, JobVerdict>,
    submit_error: Option<EngineError>,
    submissions: Mutex<Vec<OrchestrationRequest>>,
    polls: Mutex<Vec<JobId>>,
}

impl MockEngine {
    /// Engine that returns the given ids and reports success for any job
    pub fn returning(job_ids: &[&str]) -> Self {
        Self {
            job_ids: job_ids.iter().map(|id| JobId::from(*id)).collect(),
            verdicts: HashMap::new(),
            submit_error: None,
            submissions: Mutex::new(Vec::new()),
            polls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_submit(error: EngineError) -> Self {
        Self {
            submit_error: Some(error),
            ..Self::returning(&[])
        }
    }

    /// Script the verdict for one job id
    pub fn with_verdict(mut self, job_id: &str, success: bool, detail: Value) -> Self {
        self.verdicts
            .insert(JobId::from(job_id), JobVerdict { success, detail });
        self
    }

    pub fn submissions(&self) -> Vec<OrchestrationRequest> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn polled_ids(&self) -> Vec<JobId> {
        self.polls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrchestrationEngine for MockEngine {
    async fn submit(&self, request: OrchestrationRequest) -> Result<Vec<JobId>, EngineError> {
        self.submissions.lock().unwrap().push(request);
        match &self.submit_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.job_ids.clone()),
        }
    }

    async fn poll(&self, job_id: &JobId) -> Result<JobVerdict, EngineError> {
        self.polls.lock().unwrap().push(job_id.clone());
        Ok(self
            .verdicts
            .get(job_id)
            .cloned()
            .unwrap_or_else(|| JobVerdict::succeeded(Value::String("done".to_string()))))
    }
}
