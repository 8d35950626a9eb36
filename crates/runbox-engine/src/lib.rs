//! runbox engine - workflow orchestration layer
//!
//! One driver per assessment workflow, all structurally identical: attempt a
//! step, persist the identifiers it produced to the answers document, advance;
//! halt on the first failure. No retries, no rollback — whatever was recorded
//! before a failure stays recorded.

pub mod workflows;
