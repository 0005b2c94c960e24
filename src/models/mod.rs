//! # Models
//!
//! Data carried through the drivers: the declarative task definition, the jobs
//! it lists, and the per-host result every driver produces.

pub mod job;
pub mod task_definition;
pub mod task_result;

pub use job::JobSpec;
pub use task_definition::TaskDefinition;
pub use task_result::TaskResult;
