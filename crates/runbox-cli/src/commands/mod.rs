//! CLI subcommands, one per workflow
//!
//! Each command loads the answers document, builds the authenticated client
//! from the recorded credential, and hands off to the engine driver.

use runbox_client::HttpDevboxClient;
use runbox_core::{keys, Result, Secret};
use runbox_store::AnswersStore;
use std::path::PathBuf;

pub mod blueprint;
pub mod checkpoint;
pub mod operate;
pub mod provision;
pub mod scenario;

/// Global flags shared by every subcommand
#[derive(Debug)]
pub struct Context {
    pub answers: PathBuf,
    pub base_url: String,
}

/// Load the answers document and build the authenticated service client
///
/// The credential comes only from the answers document; there is no
/// environment or hardcoded fallback.
pub fn connect(context: &Context) -> Result<(AnswersStore, HttpDevboxClient)> {
    let answers = AnswersStore::load(&context.answers)?;
    let api_key = answers.require(keys::API_KEY)?.to_string();
    let client = HttpDevboxClient::new(&context.base_url, Secret::new(api_key))?;
    Ok((answers, client))
}
