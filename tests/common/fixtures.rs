#![allow(dead_code)]

use task_core::{ExecutionContext, TaskCoreConfig, TaskDefinition};

pub const PRINT_TASK_DATA: &str = r#"
id: print
driver: print
message: "message from service a"
"#;

pub const SERVICE_TASK_DATA: &str = r#"
id: run
action: run
provides:
  - service-a.run
requires:
  - service-a.init
jobs:
  - echo: "service a run"
"#;

pub const DIRECTOR_SERVICE_TASK_DATA: &str = r#"
id: setup
driver: director_service
action: run
provides:
  - chronyd.init
requires:
  - base.init
jobs:
  - RUN: dnf -y install chrony crudini
  - RUN: systemctl start chronyd
  - RUN: systemctl enable chronyd
"#;

pub fn definition(yaml: &str) -> TaskDefinition {
    TaskDefinition::from_yaml_str(yaml).expect("fixture YAML parses")
}

pub fn hosts(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

/// Context with no pause between jobs and a fixed engine identity
pub fn test_context() -> ExecutionContext {
    let mut config = TaskCoreConfig::for_testing();
    config.director.exec_user = Some("tester".to_string());
    ExecutionContext::new(config)
}
