//! A single job step: a one-entry mapping of job kind to job body.

use crate::constants::fields;
use crate::error::{TaskCoreError, TaskCoreResult};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSpec {
    /// Job kind, e.g. `echo` or `RUN`
    pub kind: String,
    /// Job body, usually the command text
    pub body: Value,
}

impl JobSpec {
    pub fn new(kind: impl Into<String>, body: Value) -> Self {
        Self {
            kind: kind.into(),
            body,
        }
    }

    /// Parse one entry of a definition's `jobs` sequence.
    pub fn from_value(value: &Value) -> TaskCoreResult<Self> {
        let map = value.as_object().ok_or_else(|| {
            TaskCoreError::invalid_definition(
                fields::JOBS,
                format!("job entry is not a mapping: {value}"),
            )
        })?;

        let mut entries = map.iter();
        match (entries.next(), entries.next()) {
            (Some((kind, body)), None) => Ok(Self::new(kind.clone(), body.clone())),
            _ => Err(TaskCoreError::invalid_definition(
                fields::JOBS,
                format!("job entry must have exactly one key, found {}", map.len()),
            )),
        }
    }

    /// Body rendered as plain text; strings are used verbatim
    pub fn body_text(&self) -> String {
        match &self.body {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}
