//! # System Constants
//!
//! Driver names, definition field names and defaults shared across the crate.

/// Names under which the built-in drivers are registered
pub mod drivers {
    pub const PRINT: &str = "print";
    pub const SERVICE: &str = "service";
    pub const DIRECTOR_SERVICE: &str = "director_service";

    /// Driver used when a task definition does not declare one
    pub const DEFAULT: &str = SERVICE;
}

/// Keys read from a task definition mapping
pub mod fields {
    pub const ID: &str = "id";
    pub const DRIVER: &str = "driver";
    pub const ACTION: &str = "action";
    pub const PROVIDES: &str = "provides";
    pub const REQUIRES: &str = "requires";
    pub const JOBS: &str = "jobs";
    pub const MESSAGE: &str = "message";
}

/// Job kinds the local command runner knows how to execute
pub mod job_kinds {
    pub const ECHO: &str = "echo";
    pub const RUN: &str = "run";
    pub const RUN_UPPER: &str = "RUN";
}

/// Deployment environments recognised by the config loader
pub mod environments {
    pub const DEVELOPMENT: &str = "development";
    pub const TEST: &str = "test";
    pub const PRODUCTION: &str = "production";

    pub const ALL: [&str; 3] = [DEVELOPMENT, TEST, PRODUCTION];
}

/// Default pause between ServiceTask job steps
pub const DEFAULT_JOB_PAUSE_MS: u64 = 1000;

/// Upper bound accepted for the ServiceTask pause
pub const MAX_JOB_PAUSE_MS: u64 = 60_000;

/// Identity submitted to the orchestration engine when nothing else is configured
pub const FALLBACK_EXEC_USER: &str = "root";
