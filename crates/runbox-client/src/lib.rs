//! runbox client - the remote devbox service boundary
//!
//! Provides:
//! - [`DevboxApi`]: the object-safe trait covering every remote operation
//!   the workflows depend on
//! - [`HttpDevboxClient`]: blocking HTTP implementation with bearer-token
//!   authentication
//! - Typed views of the service's JSON responses

pub mod api;
pub mod http;
pub mod types;

pub use api::DevboxApi;
pub use http::{HttpDevboxClient, DEFAULT_BASE_URL};
pub use types::{
    Blueprint, CreateBlueprintRequest, CreateDevboxRequest, CreateScenarioRequest, Devbox,
    ExecutionResult, Scenario, ScenarioRun, Snapshot,
};
