//! Synchronizer policy configuration.

use serde::{Deserialize, Serialize};

/// How inbound size reports are matched to frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Target resolution mode: `fixed` or `addressed`.
    ///
    /// In `fixed` mode every accepted message resizes `fixed_target` and
    /// the message's `id` field is ignored. In `addressed` mode the
    /// message must carry `width`, `height`, and `id`, and `id` names the
    /// frame to resize.
    pub mode: String,
    /// The frame resized in `fixed` mode.
    pub fixed_target: String,
    /// Reject reported heights below this value. Unset admits any.
    pub min_height: Option<f64>,
    /// Reject reported heights above this value. Unset admits any.
    pub max_height: Option<f64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mode: "fixed".into(),
            fixed_target: "DemoIframe".into(),
            min_height: None,
            max_height: None,
        }
    }
}
