//! # Task Definition
//!
//! Read-only view over the declarative mapping that describes a task. Nothing
//! is validated up front: a definition without an `id` can be constructed and
//! only fails when [`TaskDefinition::task_id`] is read.

use crate::constants::{drivers, fields};
use crate::error::{TaskCoreError, TaskCoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDefinition {
    data: Value,
}

impl TaskDefinition {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn from_yaml_str(yaml: &str) -> TaskCoreResult<Self> {
        Ok(Self::new(serde_yaml::from_str(yaml)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> TaskCoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn as_value(&self) -> &Value {
        &self.data
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The task identifier (`id`). Numeric ids are rendered as strings.
    pub fn task_id(&self) -> TaskCoreResult<Cow<'_, str>> {
        match self.data.get(fields::ID) {
            Some(Value::String(id)) => Ok(Cow::Borrowed(id)),
            Some(Value::Number(id)) => Ok(Cow::Owned(id.to_string())),
            Some(other) => Err(TaskCoreError::invalid_definition(
                fields::ID,
                format!("expected a string or number, found {other}"),
            )),
            None => Err(TaskCoreError::invalid_definition(fields::ID, "field is missing")),
        }
    }

    pub fn action(&self) -> Option<&str> {
        self.str_field(fields::ACTION)
    }

    /// Driver name used to resolve this task; `service` when not declared
    pub fn driver(&self) -> &str {
        self.str_field(fields::DRIVER).unwrap_or(drivers::DEFAULT)
    }

    pub fn message(&self) -> Option<&str> {
        self.str_field(fields::MESSAGE)
    }

    /// Raw job entries in declaration order; empty when absent
    pub fn jobs(&self) -> &[Value] {
        self.data
            .get(fields::JOBS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn provides(&self) -> Vec<&str> {
        self.str_list(fields::PROVIDES)
    }

    pub fn requires(&self) -> Vec<&str> {
        self.str_list(fields::REQUIRES)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    fn str_list(&self, key: &str) -> Vec<&str> {
        self.data
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for TaskDefinition {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}
