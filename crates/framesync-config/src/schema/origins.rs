//! Origin allowlist configuration.

use serde::{Deserialize, Serialize};

/// Which sender origins may resize frames.
///
/// Entries are compared after normalization (case-insensitive, trailing
/// slash stripped). The single entry `"*"` allows any origin. An empty
/// list rejects every message, which is the default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OriginConfig {
    pub allow: Vec<String>,
}
