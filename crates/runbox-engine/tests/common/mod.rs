// Shared test fixtures: a canned stub of the remote service and answers
// document helpers

#![allow(dead_code)]

use runbox_client::{
    Blueprint, CreateBlueprintRequest, CreateDevboxRequest, CreateScenarioRequest, Devbox,
    DevboxApi, ExecutionResult, Scenario, ScenarioRun, Snapshot,
};
use runbox_core::{Result, RunboxError};
use runbox_store::AnswersStore;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

/// Stub of the remote service returning canned responses
///
/// Records every call in order so tests can assert exactly which remote
/// operations a driver issued, and can be told to fail on the Nth call.
pub struct StubClient {
    calls: Mutex<Vec<String>>,
    fail_at: Option<usize>,
    pub devbox: Devbox,
    pub listed: Vec<Devbox>,
}

impl StubClient {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: None,
            devbox: Devbox {
                id: "d1".into(),
                name: "x".into(),
                status: "running".into(),
            },
            listed: Vec::new(),
        }
    }

    /// Fail the `n`th call (1-based) with RemoteOperationFailed
    pub fn fail_at(mut self, n: usize) -> Self {
        self.fail_at = Some(n);
        self
    }

    pub fn with_listed(mut self, devboxes: Vec<Devbox>) -> Self {
        self.listed = devboxes;
        self
    }

    fn record(&self, op: &str) -> Result<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(op.to_string());
        if Some(calls.len()) == self.fail_at {
            return Err(RunboxError::remote(op, "stubbed failure"));
        }
        Ok(())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl DevboxApi for StubClient {
    fn create_devbox(&self, req: &CreateDevboxRequest) -> Result<Devbox> {
        self.record("create_devbox")?;
        let mut devbox = self.devbox.clone();
        if devbox.name.is_empty() {
            devbox.name = req.name.clone();
        }
        Ok(devbox)
    }

    fn await_running(&self, devbox_id: &str) -> Result<Devbox> {
        self.record("await_running")?;
        let mut devbox = self.devbox.clone();
        devbox.id = devbox_id.to_string();
        devbox.status = "running".into();
        Ok(devbox)
    }

    fn list_devboxes(&self) -> Result<Vec<Devbox>> {
        self.record("list_devboxes")?;
        Ok(self.listed.clone())
    }

    fn write_file(&self, _devbox_id: &str, path: &str, _contents: &str) -> Result<()> {
        self.record(&format!("write_file:{}", path))?;
        Ok(())
    }

    fn execute_command(&self, _devbox_id: &str, command: &str) -> Result<ExecutionResult> {
        self.record(&format!("execute_command:{}", command))?;
        Ok(ExecutionResult {
            exit_code: 0,
            stdout: "stub output".into(),
            stderr: String::new(),
        })
    }

    fn create_snapshot(&self, _devbox_id: &str, name: &str) -> Result<Snapshot> {
        self.record("create_snapshot")?;
        Ok(Snapshot {
            id: "snap_1".into(),
            name: name.to_string(),
        })
    }

    fn create_blueprint(&self, req: &CreateBlueprintRequest) -> Result<Blueprint> {
        self.record("create_blueprint")?;
        Ok(Blueprint {
            id: "bpt_1".into(),
            name: req.name.clone(),
        })
    }

    fn create_scenario(&self, req: &CreateScenarioRequest) -> Result<Scenario> {
        self.record("create_scenario")?;
        Ok(Scenario {
            id: "scn_1".into(),
            name: req.name.clone(),
        })
    }

    fn start_scenario_run(&self, _scenario_id: &str) -> Result<ScenarioRun> {
        self.record("start_scenario_run")?;
        Ok(ScenarioRun {
            id: "run_1".into(),
            state: "running".into(),
        })
    }

    fn complete_scenario_run(&self, run_id: &str) -> Result<ScenarioRun> {
        self.record("complete_scenario_run")?;
        Ok(ScenarioRun {
            id: run_id.to_string(),
            state: "completed".into(),
        })
    }
}

/// Write an answers document into a fresh temp dir and load it
pub fn answers_with(pairs: &[(&str, &str)]) -> (TempDir, AnswersStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("answers.json");
    let map: serde_json::Map<String, serde_json::Value> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    fs::write(&path, serde_json::to_string_pretty(&map).unwrap()).unwrap();
    let store = AnswersStore::load(&path).unwrap();
    (temp_dir, store)
}

/// Populate a local resources directory with the assessment's files
pub fn resources_dir(temp_dir: &TempDir) -> std::path::PathBuf {
    let dir = temp_dir.path().join("resources");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("me.txt"), "replace-me@example.edu\n").unwrap();
    fs::write(dir.join("test.py"), "print(open('me.txt').read())\n").unwrap();
    dir
}
