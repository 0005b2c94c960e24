//! TaskManager singleton and driver resolution.

mod common;

use common::*;
use std::thread;
use task_core::{DriverKind, DriverRegistry, TaskCoreError, TaskManager};

#[test]
fn instance_is_shared() {
    let first = TaskManager::instance();
    let second = TaskManager::instance();
    assert!(std::ptr::eq(first, second));
    assert!(TaskManager::is_initialized());
}

#[test]
fn concurrent_first_access_yields_one_instance() {
    let addresses: Vec<usize> = (0..16)
        .map(|_| thread::spawn(|| TaskManager::instance() as *const TaskManager as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(addresses[0], TaskManager::instance() as *const TaskManager as usize);
}

#[test]
fn second_construction_fails() {
    TaskManager::instance();
    let err = TaskManager::initialize(DriverRegistry::builtin()).unwrap_err();
    assert!(matches!(err, TaskCoreError::ConfigurationError(_)));
}

#[test]
fn builtin_drivers_resolve() {
    let manager = TaskManager::instance();
    assert_eq!(manager.get_driver("service").unwrap().kind(), DriverKind::Service);
    assert_eq!(
        manager.get_driver("director_service").unwrap().kind(),
        DriverKind::DirectorService
    );
    assert_eq!(manager.get_driver("print").unwrap().kind(), DriverKind::Print);
    assert_eq!(
        manager.driver_names(),
        vec!["director_service", "print", "service"]
    );
}

#[test]
fn unknown_driver_is_reported_distinctly() {
    let err = TaskManager::instance().get_driver("doesnotexist").unwrap_err();
    match err {
        TaskCoreError::DriverNotFound { name, available } => {
            assert_eq!(name, "doesnotexist");
            assert_eq!(available.len(), 3);
        }
        other => panic!("expected DriverNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn create_task_uses_declared_driver() {
    let ctx = test_context();
    let manager = TaskManager::instance();

    let task = manager
        .create_task("foo", definition(PRINT_TASK_DATA), hosts(&["host-a"]), &ctx)
        .unwrap();
    assert_eq!(task.task_id().unwrap(), "print");
    assert!(task.jobs().is_empty());

    // no `driver` key: falls back to the service driver
    let task = manager
        .create_task("foo", definition(SERVICE_TASK_DATA), hosts(&["host-a"]), &ctx)
        .unwrap();
    assert_eq!(task.jobs().len(), 1);
    let results = task.execute().await.unwrap();
    assert!(results[0].status());
}

#[test]
fn create_task_rejects_unknown_driver() {
    let yaml = "id: x\ndriver: doesnotexist\n";
    let err = TaskManager::instance()
        .create_task("foo", definition(yaml), hosts(&["host-a"]), &test_context())
        .unwrap_err();
    assert!(err.is_driver_not_found());
}
