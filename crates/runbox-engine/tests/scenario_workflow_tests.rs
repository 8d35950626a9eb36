// Test suite for the scenario workflow
// Tests the define→run→exercise→complete sequence and that identifiers
// persisted before a failure stay persisted

mod common;

use common::{answers_with, resources_dir, StubClient};
use runbox_core::ErrorKind;
use runbox_engine::workflows::scenario::{scenario, ScenarioOptions};
use runbox_store::AnswersStore;

fn options(resources: std::path::PathBuf) -> ScenarioOptions {
    ScenarioOptions {
        name: "resources-checker-scenario".into(),
        description: Some("Checks the resources folder is present".into()),
        scorer: "opaque scorer payload".into(),
        resources_dir: resources,
        remote_prefix: "/workspace/resources".into(),
        contact_file: "me.txt".into(),
        interpreter: "python3".into(),
        script: "test.py".into(),
    }
}

#[test]
fn test_scenario_full_sequence() {
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
        ("devbox-id", "d1"),
    ]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new();

    let result = scenario(&client, &mut answers, &options(resources)).unwrap();

    assert_eq!(result.scenario_id, "scn_1");
    assert_eq!(result.run_id, "run_1");
    assert!(result.completed);

    assert_eq!(
        client.calls(),
        vec![
            "create_scenario",
            "start_scenario_run",
            "write_file:/workspace/resources/me.txt",
            "write_file:/workspace/resources/test.py",
            "write_file:/workspace/resources/me.txt",
            "execute_command:python3 /workspace/resources/test.py",
            "complete_scenario_run",
        ]
    );

    let reloaded = AnswersStore::load(temp_dir.path().join("answers.json")).unwrap();
    assert_eq!(reloaded.get("ext-scenario-run-id"), Some("run_1"));
}

#[test]
fn test_scenario_run_id_survives_later_failure() {
    // Stub fails on call 6 (the script execution); the run id recorded at
    // call 2 stays, and completion is never attempted
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
        ("devbox-id", "d1"),
    ]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new().fail_at(6);

    let err = scenario(&client, &mut answers, &options(resources)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteOperationFailed);
    assert!(!client.calls().iter().any(|c| c == "complete_scenario_run"));

    let reloaded = AnswersStore::load(temp_dir.path().join("answers.json")).unwrap();
    assert_eq!(reloaded.get("ext-scenario-run-id"), Some("run_1"));
}

#[test]
fn test_scenario_missing_devbox_id_makes_no_remote_calls() {
    // The target devbox is required up front, before the scenario is created
    let (temp_dir, mut answers) = answers_with(&[("api-key", "k")]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new();

    let err = scenario(&client, &mut answers, &options(resources)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequiredFieldAbsent);
    assert_eq!(client.call_count(), 0);
}
