//! Core facilities shared across the runbox workspace
//!
//! This crate provides the foundations every other crate builds on:
//!
//! - **Error facility**: the canonical [`RunboxError`] taxonomy with stable
//!   error codes
//! - **Secret data**: [`Secret<T>`] marker for automatic redaction of the
//!   recorded API credential
//! - **Answer keys**: canonical key constants for the shared answers document
//! - **Logging**: single initialization point for the tracing subscriber

pub mod errors;
pub mod keys;
pub mod logging;
pub mod secret;

pub use errors::{ErrorKind, Result, RunboxError};
pub use secret::Secret;
