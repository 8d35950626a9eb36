// Test suite for the operate workflow
// Tests name-based id resolution, upload/overwrite/execute ordering, and
// required-key gating

mod common;

use common::{answers_with, resources_dir, StubClient};
use runbox_client::Devbox;
use runbox_core::ErrorKind;
use runbox_engine::workflows::operate::{operate, OperateOptions};
use runbox_store::AnswersStore;

fn options(resources: std::path::PathBuf) -> OperateOptions {
    OperateOptions {
        resources_dir: resources,
        ..OperateOptions::default()
    }
}

#[test]
fn test_operate_resolves_id_by_name_and_persists_before_upload() {
    // Given: no devbox-id recorded, and the listing contains a match
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
    ]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new().with_listed(vec![
        Devbox {
            id: "other".into(),
            name: "someone-else".into(),
            status: "running".into(),
        },
        Devbox {
            id: "d9".into(),
            name: "student@example.edu".into(),
            status: "running".into(),
        },
    ]);

    let result = operate(&client, &mut answers, &options(resources)).unwrap();

    // Then: the matched id was resolved and recorded
    assert_eq!(result.devbox_id, "d9");
    let reloaded = AnswersStore::load(temp_dir.path().join("answers.json")).unwrap();
    assert_eq!(reloaded.get("devbox-id"), Some("d9"));

    // And: resolution happened before any upload
    let calls = client.calls();
    assert_eq!(calls[0], "list_devboxes");
    assert!(calls[1].starts_with("write_file:"));
}

#[test]
fn test_operate_skips_listing_when_id_recorded() {
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
        ("devbox-id", "d1"),
    ]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new();

    operate(&client, &mut answers, &options(resources)).unwrap();

    assert!(!client.calls().iter().any(|c| c == "list_devboxes"));
}

#[test]
fn test_operate_uploads_then_overwrites_contact_then_executes() {
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
        ("devbox-id", "d1"),
    ]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new();

    let result = operate(&client, &mut answers, &options(resources)).unwrap();

    let calls = client.calls();
    // Sorted upload order: me.txt then test.py, then the contact overwrite,
    // then the interpreter run
    assert_eq!(
        calls,
        vec![
            "write_file:/workspace/resources/me.txt",
            "write_file:/workspace/resources/test.py",
            "write_file:/workspace/resources/me.txt",
            "execute_command:python3 /workspace/resources/test.py",
        ]
    );
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout, "stub output");
    assert_eq!(result.uploaded.len(), 2);
}

#[test]
fn test_operate_missing_name_makes_no_remote_calls() {
    let (temp_dir, mut answers) = answers_with(&[("api-key", "k")]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new();

    let err = operate(&client, &mut answers, &options(resources)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequiredFieldAbsent);
    assert_eq!(client.call_count(), 0);
}

#[test]
fn test_operate_unmatched_name_halts_before_upload() {
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
    ]);
    let resources = resources_dir(&temp_dir);
    let client = StubClient::new().with_listed(vec![]);

    let err = operate(&client, &mut answers, &options(resources)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RemoteOperationFailed);
    assert_eq!(client.calls(), vec!["list_devboxes"]);
}

#[test]
fn test_operate_missing_resources_dir_is_local_io_error() {
    let (temp_dir, mut answers) = answers_with(&[
        ("api-key", "k"),
        ("devbox-name", "student@example.edu"),
        ("devbox-id", "d1"),
    ]);
    let client = StubClient::new();

    let missing = temp_dir.path().join("no-such-dir");
    let err = operate(&client, &mut answers, &options(missing)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(client.call_count(), 0);
}
