//! # Orchestration Engine Interface
//!
//! The external engine that `DirectorServiceTask` delegates to. The engine
//! receives one batch of jobs for a set of target hosts, hands back job
//! identifiers, and reports a single verdict per job when polled.
//!
//! Only the interface lives here; transports are provided by the embedding
//! application.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Failures talking to the engine. These are API failures and propagate to the
/// caller; they are never folded into a `TaskResult`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Engine transport failure: {0}")]
    Transport(String),

    #[error("Malformed engine response: {0}")]
    MalformedResponse(String),

    #[error("Engine accepted the orchestration but returned no job identifiers")]
    NoJobsReturned,

    #[error("Polling job {job_id} did not finish within {timeout:?}")]
    PollTimeout { job_id: JobId, timeout: Duration },
}

/// Identifier the engine hands back for a submitted job
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Engines frequently answer with raw bytes; decode them as UTF-8
    pub fn from_bytes(raw: &[u8]) -> Result<Self, EngineError> {
        std::str::from_utf8(raw)
            .map(Self::new)
            .map_err(|e| EngineError::MalformedResponse(format!("job id is not UTF-8: {e}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One orchestration submission: every job, every target, one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrchestrationRequest {
    /// Identity the engine executes the jobs as
    pub user_exec: String,
    /// Job specifications, in definition order
    pub orchestrations: Vec<Value>,
    /// Hosts the engine should target, in request order
    pub defined_targets: Vec<String>,
    /// Ask the engine for unprocessed job identifiers
    pub raw_return: bool,
}

/// Terminal verdict for a polled job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobVerdict {
    pub success: bool,
    pub detail: Value,
}

impl JobVerdict {
    pub fn succeeded(detail: Value) -> Self {
        Self {
            success: true,
            detail,
        }
    }

    pub fn failed(detail: Value) -> Self {
        Self {
            success: false,
            detail,
        }
    }
}

#[async_trait]
pub trait OrchestrationEngine: Send + Sync {
    /// Submit a batch of jobs for the given targets
    async fn submit(&self, request: OrchestrationRequest) -> Result<Vec<JobId>, EngineError>;

    /// Wait for the job to reach a terminal state and report it
    async fn poll(&self, job_id: &JobId) -> Result<JobVerdict, EngineError>;
}

/// Engine used when none is wired in; every call fails with a transport error
#[derive(Debug, Default, Clone)]
pub struct UnconfiguredEngine;

#[async_trait]
impl OrchestrationEngine for UnconfiguredEngine {
    async fn submit(&self, _request: OrchestrationRequest) -> Result<Vec<JobId>, EngineError> {
        Err(EngineError::Transport(
            "no orchestration engine configured".to_string(),
        ))
    }

    async fn poll(&self, _job_id: &JobId) -> Result<JobVerdict, EngineError> {
        Err(EngineError::Transport(
            "no orchestration engine configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_id_decodes_bytes() {
        assert_eq!(JobId::from_bytes(b"foo").unwrap(), JobId::from("foo"));
        assert!(matches!(
            JobId::from_bytes(&[0xff, 0xfe]),
            Err(EngineError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn unconfigured_engine_refuses_work() {
        let engine = UnconfiguredEngine;
        let request = OrchestrationRequest {
            user_exec: "root".to_string(),
            orchestrations: vec![],
            defined_targets: vec!["host-a".to_string()],
            raw_return: true,
        };
        assert!(matches!(
            engine.submit(request).await,
            Err(EngineError::Transport(_))
        ));
    }
}
