//! Configuration schema types for framesync.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching built-in behavior.

mod frames;
mod logging;
mod origins;
mod sync;

pub use frames::*;
pub use logging::*;
pub use origins::*;
pub use sync::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for framesync.
///
/// All options have defaults matching current behavior. Only override what
/// you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FramesyncConfig {
    pub origins: OriginConfig,
    pub sync: SyncConfig,
    pub frames: FramesConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
