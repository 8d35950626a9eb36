// Test suite for the checkpoint workflow

mod common;

use common::{answers_with, StubClient};
use runbox_core::ErrorKind;
use runbox_engine::workflows::checkpoint::{checkpoint, CheckpointOptions};
use runbox_store::AnswersStore;

#[test]
fn test_checkpoint_records_snapshot_id() {
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
        ("devbox-id", "d1"),
    ]);
    let client = StubClient::new();

    let result = checkpoint(&client, &mut answers, &CheckpointOptions::default()).unwrap();

    assert_eq!(result.snapshot_id, "snap_1");
    // Default name is derived from the recorded devbox name
    assert_eq!(
        result.snapshot_name,
        "snapshot-after-operations-student@example.edu"
    );

    let reloaded = AnswersStore::load(temp_dir.path().join("answers.json")).unwrap();
    assert_eq!(reloaded.get("snapshot-id"), Some("snap_1"));
    assert_eq!(client.calls(), vec!["create_snapshot"]);
}

#[test]
fn test_checkpoint_honors_explicit_name() {
    let (_temp_dir, mut answers) = answers_with(&[("api-key", "k"), ("devbox-id", "d1")]);
    let client = StubClient::new();

    let result = checkpoint(
        &client,
        &mut answers,
        &CheckpointOptions {
            name: Some("before-teardown".into()),
        },
    )
    .unwrap();

    assert_eq!(result.snapshot_name, "before-teardown");
}

#[test]
fn test_checkpoint_missing_devbox_id_makes_no_remote_calls() {
    let (_temp_dir, mut answers) = answers_with(&[("api-key", "k")]);
    let client = StubClient::new();

    let err = checkpoint(&client, &mut answers, &CheckpointOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequiredFieldAbsent);
    assert_eq!(client.call_count(), 0);
}

#[test]
fn test_checkpoint_placeholder_devbox_id_is_treated_as_absent() {
    let (_temp_dir, mut answers) =
        answers_with(&[("api-key", "k"), ("devbox-id", "YOUR_DEVBOX_ID")]);
    let client = StubClient::new();

    let err = checkpoint(&client, &mut answers, &CheckpointOptions::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequiredFieldAbsent);
    assert_eq!(client.call_count(), 0);
}
