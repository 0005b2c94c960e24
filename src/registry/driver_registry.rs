//! Name-keyed table of driver constructors, built once and read-only after.

use crate::constants::drivers;
use crate::error::{TaskCoreError, TaskCoreResult};
use crate::tasks::{DirectorServiceTask, ExecutionContext, PrintTask, ServiceTask, Task, TaskBase};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Builds a driver from its base state and the collaborators it needs
pub type DriverConstructor = fn(TaskBase, &ExecutionContext) -> Box<dyn Task>;

/// The driver implementation a registry name resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverKind {
    Print,
    Service,
    DirectorService,
}

impl DriverKind {
    /// Name the built-in registry uses for this kind
    pub fn default_name(self) -> &'static str {
        match self {
            DriverKind::Print => drivers::PRINT,
            DriverKind::Service => drivers::SERVICE,
            DriverKind::DirectorService => drivers::DIRECTOR_SERVICE,
        }
    }

    pub fn constructor(self) -> DriverConstructor {
        match self {
            DriverKind::Print => PrintTask::construct,
            DriverKind::Service => ServiceTask::construct,
            DriverKind::DirectorService => DirectorServiceTask::construct,
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DriverKind::Print => "PrintTask",
            DriverKind::Service => "ServiceTask",
            DriverKind::DirectorService => "DirectorServiceTask",
        };
        f.write_str(name)
    }
}

#[derive(Clone)]
pub struct DriverEntry {
    name: String,
    kind: DriverKind,
    constructor: DriverConstructor,
}

impl DriverEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DriverKind {
        self.kind
    }

    /// Construct a driver instance for one invocation
    pub fn build(&self, base: TaskBase, ctx: &ExecutionContext) -> Box<dyn Task> {
        (self.constructor)(base, ctx)
    }
}

impl fmt::Debug for DriverEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverEntry")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Registry of available drivers. Names are case-sensitive and unique.
#[derive(Debug, Clone, Default)]
pub struct DriverRegistry {
    entries: HashMap<String, DriverEntry>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three built-in drivers under their default names
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for kind in [DriverKind::Print, DriverKind::Service, DriverKind::DirectorService] {
            registry.entries.insert(
                kind.default_name().to_string(),
                DriverEntry {
                    name: kind.default_name().to_string(),
                    kind,
                    constructor: kind.constructor(),
                },
            );
        }
        registry
    }

    /// Build a registry from `(name, kind)` pairs, e.g. read from configuration
    pub fn from_entries<'a, I>(entries: I) -> TaskCoreResult<Self>
    where
        I: IntoIterator<Item = (&'a str, DriverKind)>,
    {
        let mut registry = Self::new();
        for (name, kind) in entries {
            registry.register(name, kind, kind.constructor())?;
        }
        Ok(registry)
    }

    pub fn register(
        &mut self,
        name: &str,
        kind: DriverKind,
        constructor: DriverConstructor,
    ) -> TaskCoreResult<()> {
        if self.entries.contains_key(name) {
            return Err(TaskCoreError::DuplicateDriver(name.to_string()));
        }

        debug!(name = name, kind = %kind, "Registering task driver");
        self.entries.insert(
            name.to_string(),
            DriverEntry {
                name: name.to_string(),
                kind,
                constructor,
            },
        );
        Ok(())
    }

    pub fn get(&self, name: &str) -> TaskCoreResult<&DriverEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| TaskCoreError::DriverNotFound {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
