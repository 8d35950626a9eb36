//! Canonical keys of the shared answers document
//!
//! Every workflow reads and writes the same flat JSON object; these constants
//! keep the key spelling consistent across drivers. New workflows may add
//! keys, but existing ones are never renamed.

/// Bearer credential for the remote devbox service
pub const API_KEY: &str = "api-key";

/// Name the primary devbox was provisioned under
pub const DEVBOX_NAME: &str = "devbox-name";
/// Identifier of the primary devbox
pub const DEVBOX_ID: &str = "devbox-id";

/// Identifier of the snapshot taken after devbox operations
pub const SNAPSHOT_ID: &str = "snapshot-id";

/// Name of the reusable blueprint image
pub const BLUEPRINT_NAME: &str = "blueprint-name";
/// Identifier of the reusable blueprint image
pub const BLUEPRINT_ID: &str = "blueprint-id";

/// Name of the devbox booted from the blueprint
pub const DEVBOX_FROM_BLUEPRINT_NAME: &str = "devbox-from-blueprint-name";
/// Identifier of the devbox booted from the blueprint
pub const DEVBOX_FROM_BLUEPRINT_ID: &str = "devbox-from-blueprint-id";

/// Identifier of the scored scenario run
pub const EXT_SCENARIO_RUN_ID: &str = "ext-scenario-run-id";
