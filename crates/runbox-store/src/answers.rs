//! The answers document accessor
//!
//! One flat JSON object on disk carries the credential and every remote
//! resource identifier between independently invoked workflows. The document
//! is created externally before the first run; workflows only read and
//! extend it.

use crate::atomic::atomic_write;
use runbox_core::{Result, RunboxError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Values the assessment template pre-fills before a real identifier is
/// recorded. `require` treats them the same as absent keys.
fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value.starts_with("YOUR_")
}

/// In-memory view of the on-disk answers document
///
/// Every mutation persists the whole document immediately (pretty-printed,
/// atomic replace), so a workflow that fails mid-way leaves everything it
/// had already recorded. A `BTreeMap` keeps the serialized key order stable
/// across rewrites.
#[derive(Debug)]
pub struct AnswersStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl AnswersStore {
    /// Load the answers document from disk
    ///
    /// Fails with `ConfigMissing` if the file does not exist and
    /// `ConfigMalformed` if it is not a flat JSON string map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RunboxError::ConfigMissing {
                    path: path.display().to_string(),
                });
            }
            Err(e) => return Err(RunboxError::from_io("read_answers", e)),
        };

        let values: BTreeMap<String, String> =
            serde_json::from_str(&raw).map_err(|e| RunboxError::ConfigMalformed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { path, values })
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a recorded value
    ///
    /// Placeholder values are reported as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !is_placeholder(v))
    }

    /// Look up a value the calling workflow cannot proceed without
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| RunboxError::RequiredFieldAbsent {
            key: key.to_string(),
        })
    }

    /// Record a value and persist the whole document
    ///
    /// Overwrites any existing value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        tracing::debug!(key = %key, "recording answer");
        self.values.insert(key, value);
        self.persist()
    }

    /// Iterate over all recorded key/value pairs
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn persist(&self) -> Result<()> {
        let mut rendered = serde_json::to_string_pretty(&self.values)?;
        rendered.push('\n');
        atomic_write(&self.path, rendered.as_bytes())
    }
}
