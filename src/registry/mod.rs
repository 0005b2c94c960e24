//! # Driver Registry
//!
//! Resolution of task driver names to driver constructors.
//!
//! ```text
//! TaskManager (process-wide singleton)
//! └── DriverRegistry   name -> DriverEntry { kind, constructor }
//!     ├── "print"            -> PrintTask
//!     ├── "service"          -> ServiceTask
//!     └── "director_service" -> DirectorServiceTask
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use task_core::registry::{DriverKind, TaskManager};
//!
//! let manager = TaskManager::instance();
//! let entry = manager.get_driver("print").unwrap();
//! assert_eq!(entry.kind(), DriverKind::Print);
//! assert!(manager.get_driver("doesnotexist").is_err());
//! ```

pub mod driver_registry;
pub mod task_manager;

pub use driver_registry::{DriverConstructor, DriverEntry, DriverKind, DriverRegistry};
pub use task_manager::TaskManager;
