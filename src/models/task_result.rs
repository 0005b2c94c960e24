//! Per-host outcome record produced by every driver invocation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of running a task against one host.
///
/// Fields are read-only once built; a driver returns exactly one of these per
/// requested host, in host order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    host: String,
    status: bool,
    data: Value,
}

impl TaskResult {
    pub fn new(host: impl Into<String>, status: bool, data: Value) -> Self {
        Self {
            host: host.into(),
            status,
            data,
        }
    }

    pub fn success(host: impl Into<String>, data: Value) -> Self {
        Self::new(host, true, data)
    }

    pub fn failure(host: impl Into<String>, data: Value) -> Self {
        Self::new(host, false, data)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `true` when the work succeeded on this host
    pub fn status(&self) -> bool {
        self.status
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Whether every result in a batch succeeded
    pub fn all_succeeded(results: &[TaskResult]) -> bool {
        results.iter().all(TaskResult::status)
    }
}
