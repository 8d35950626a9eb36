//! Error facility for runbox workflows
//!
//! Every crate in the workspace returns [`RunboxError`]. The taxonomy is
//! deliberately flat: a workflow driver halts on the first error it sees, so
//! callers match on [`ErrorKind`] (or compare stable codes) rather than
//! unwinding nested error chains.

use thiserror::Error;

/// Result type alias using RunboxError
pub type Result<T> = std::result::Result<T, RunboxError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// testing, and user-facing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The answers document does not exist on disk
    ConfigMissing,
    /// The answers document exists but is not a valid JSON string map
    ConfigMalformed,
    /// A key the workflow depends on has not been recorded yet
    RequiredFieldAbsent,
    /// A remote service call failed (transport, auth, or service error)
    RemoteOperationFailed,
    /// A blocking operation was interrupted by the user
    UserInterrupted,

    // Ambient local failures
    Io,
    Serialization,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::ConfigMissing => "ERR_CONFIG_MISSING",
            ErrorKind::ConfigMalformed => "ERR_CONFIG_MALFORMED",
            ErrorKind::RequiredFieldAbsent => "ERR_REQUIRED_FIELD_ABSENT",
            ErrorKind::RemoteOperationFailed => "ERR_REMOTE_OPERATION_FAILED",
            ErrorKind::UserInterrupted => "ERR_USER_INTERRUPTED",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Error taxonomy for runbox operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunboxError {
    /// Answers document not found on disk
    #[error("answers file not found: {path}")]
    ConfigMissing { path: String },

    /// Answers document is not parseable as a flat JSON string map
    #[error("answers file is not a valid JSON string map: {path}: {message}")]
    ConfigMalformed { path: String, message: String },

    /// A required key is absent (or still a placeholder) in the answers document
    #[error("required key '{key}' is not recorded in the answers file")]
    RequiredFieldAbsent { key: String },

    /// A remote service operation failed
    #[error("remote operation '{op}' failed: {message}")]
    RemoteOperationFailed { op: String, message: String },

    /// A blocking call was interrupted by the user
    #[error("operation '{op}' interrupted by user")]
    UserInterrupted { op: String },

    /// Local I/O failure
    #[error("io error during '{op}': {message}")]
    Io { op: String, message: String },

    /// JSON encoding/decoding failure outside the answers document itself
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl RunboxError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            RunboxError::ConfigMissing { .. } => ErrorKind::ConfigMissing,
            RunboxError::ConfigMalformed { .. } => ErrorKind::ConfigMalformed,
            RunboxError::RequiredFieldAbsent { .. } => ErrorKind::RequiredFieldAbsent,
            RunboxError::RemoteOperationFailed { .. } => ErrorKind::RemoteOperationFailed,
            RunboxError::UserInterrupted { .. } => ErrorKind::UserInterrupted,
            RunboxError::Io { .. } => ErrorKind::Io,
            RunboxError::Serialization { .. } => ErrorKind::Serialization,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Wrap a local I/O failure, preserving the operation name
    ///
    /// An interrupted syscall is surfaced as [`RunboxError::UserInterrupted`]
    /// so the CLI can report it distinctly from ordinary I/O failures.
    pub fn from_io(op: impl Into<String>, err: std::io::Error) -> Self {
        let op = op.into();
        if err.kind() == std::io::ErrorKind::Interrupted {
            RunboxError::UserInterrupted { op }
        } else {
            RunboxError::Io {
                op,
                message: err.to_string(),
            }
        }
    }

    /// Wrap a remote service failure, preserving the operation name
    pub fn remote(op: impl Into<String>, message: impl Into<String>) -> Self {
        RunboxError::RemoteOperationFailed {
            op: op.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for RunboxError {
    fn from(err: serde_json::Error) -> Self {
        RunboxError::Serialization {
            message: err.to_string(),
        }
    }
}
