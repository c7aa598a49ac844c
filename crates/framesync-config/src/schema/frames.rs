//! Declared frame configuration.

use serde::{Deserialize, Serialize};

/// Frames present in the host document at startup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FramesConfig {
    pub declare: Vec<FrameDecl>,
}

/// One declared frame. `id` is the DOM element id messages address;
/// `src` is informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameDecl {
    pub id: String,
    pub src: Option<String>,
}
