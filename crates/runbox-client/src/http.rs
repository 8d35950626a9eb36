//! Blocking HTTP implementation of the devbox service contract
//!
//! Every request carries the bearer credential from the answers document.
//! Non-2xx responses and transport errors are wrapped as
//! `RemoteOperationFailed` with the operation name and the service's message.

use crate::api::DevboxApi;
use crate::types::{
    Blueprint, CreateBlueprintRequest, CreateDevboxRequest, CreateScenarioRequest, Devbox,
    DevboxList, ExecutionResult, Scenario, ScenarioRun, Snapshot, STATUS_FAILURE,
};
use runbox_core::{Result, RunboxError, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::thread;
use std::time::Duration;

/// Vendor endpoint used when no `--base-url` override is given
pub const DEFAULT_BASE_URL: &str = "https://api.runloop.pro";

/// Interval between readiness polls
const POLL_INTERVAL: Duration = Duration::from_secs(2);
/// Readiness polls before giving up on a provisioning devbox
const MAX_POLLS: u32 = 150;

/// Blocking client for the devbox service
pub struct HttpDevboxClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: Secret<String>,
}

impl HttpDevboxClient {
    /// Build a client for `base_url` authenticating with `api_key`
    pub fn new(base_url: impl Into<String>, api_key: Secret<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| RunboxError::remote("client_init", e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<R: DeserializeOwned>(&self, op: &str, path: &str) -> Result<R> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(self.api_key.expose())
            .send()
            .map_err(|e| RunboxError::remote(op, e.to_string()))?;
        Self::decode(op, response)
    }

    fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        op: &str,
        path: &str,
        body: &B,
    ) -> Result<R> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.api_key.expose())
            .json(body)
            .send()
            .map_err(|e| RunboxError::remote(op, e.to_string()))?;
        Self::decode(op, response)
    }

    /// POST where only the status matters; some write endpoints return an
    /// empty body on success
    fn post_no_content<B: Serialize>(&self, op: &str, path: &str, body: &B) -> Result<()> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(self.api_key.expose())
            .json(body)
            .send()
            .map_err(|e| RunboxError::remote(op, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(RunboxError::remote(
                op,
                format!("{}: {}", status, message.trim()),
            ));
        }
        Ok(())
    }

    fn decode<R: DeserializeOwned>(op: &str, response: reqwest::blocking::Response) -> Result<R> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(RunboxError::remote(
                op,
                format!("{}: {}", status, message.trim()),
            ));
        }
        response
            .json::<R>()
            .map_err(|e| RunboxError::remote(op, format!("invalid response body: {}", e)))
    }
}

impl DevboxApi for HttpDevboxClient {
    fn create_devbox(&self, req: &CreateDevboxRequest) -> Result<Devbox> {
        tracing::debug!(name = %req.name, "creating devbox");
        self.post_json("create_devbox", "/v1/devboxes", req)
    }

    fn await_running(&self, devbox_id: &str) -> Result<Devbox> {
        let op = "await_running";
        let path = format!("/v1/devboxes/{}", devbox_id);
        for _ in 0..MAX_POLLS {
            let devbox: Devbox = self.get_json(op, &path)?;
            if devbox.is_running() {
                return Ok(devbox);
            }
            if devbox.status == STATUS_FAILURE {
                return Err(RunboxError::remote(
                    op,
                    format!("devbox {} entered status 'failure'", devbox_id),
                ));
            }
            tracing::debug!(devbox_id = %devbox_id, status = %devbox.status, "still provisioning");
            thread::sleep(POLL_INTERVAL);
        }
        Err(RunboxError::remote(
            op,
            format!("devbox {} did not reach 'running'", devbox_id),
        ))
    }

    fn list_devboxes(&self) -> Result<Vec<Devbox>> {
        let list: DevboxList = self.get_json("list_devboxes", "/v1/devboxes")?;
        Ok(list.devboxes)
    }

    fn write_file(&self, devbox_id: &str, path: &str, contents: &str) -> Result<()> {
        let body = json!({ "path": path, "contents": contents });
        self.post_no_content(
            "write_file",
            &format!("/v1/devboxes/{}/write_file", devbox_id),
            &body,
        )
    }

    fn execute_command(&self, devbox_id: &str, command: &str) -> Result<ExecutionResult> {
        tracing::debug!(devbox_id = %devbox_id, command = %command, "executing command");
        let body = json!({ "command": command });
        self.post_json(
            "execute_command",
            &format!("/v1/devboxes/{}/execute_sync", devbox_id),
            &body,
        )
    }

    fn create_snapshot(&self, devbox_id: &str, name: &str) -> Result<Snapshot> {
        let body = json!({ "name": name });
        self.post_json(
            "create_snapshot",
            &format!("/v1/devboxes/{}/snapshot_disk", devbox_id),
            &body,
        )
    }

    fn create_blueprint(&self, req: &CreateBlueprintRequest) -> Result<Blueprint> {
        tracing::debug!(name = %req.name, "creating blueprint");
        self.post_json("create_blueprint", "/v1/blueprints", req)
    }

    fn create_scenario(&self, req: &CreateScenarioRequest) -> Result<Scenario> {
        tracing::debug!(name = %req.name, "creating scenario");
        self.post_json("create_scenario", "/v1/scenarios", req)
    }

    fn start_scenario_run(&self, scenario_id: &str) -> Result<ScenarioRun> {
        self.post_json(
            "start_scenario_run",
            &format!("/v1/scenarios/{}/start_run", scenario_id),
            &json!({}),
        )
    }

    fn complete_scenario_run(&self, run_id: &str) -> Result<ScenarioRun> {
        self.post_json(
            "complete_scenario_run",
            &format!("/v1/scenario_runs/{}/complete", run_id),
            &json!({}),
        )
    }
}
