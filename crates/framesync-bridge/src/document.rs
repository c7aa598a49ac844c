//! The host document's model of its embedded frames.
//!
//! Styles are DOM-faithful strings: writing a height of `250` stores
//! `"250px"` on the frame, exactly the string the hosting page would put
//! on the element. The document is owned by the embedding application;
//! the synchronizer only performs single idempotent style writes on it.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use framesync_common::FrameId;

/// Pixel length string for a style write. String building, not unit
/// conversion: `250` becomes `"250px"`, `250.5` becomes `"250.5px"`.
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Inline style state of one embedded frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrameStyle {
    pub height: Option<String>,
    pub width: Option<String>,
}

impl FrameStyle {
    /// Write the pixel height style.
    pub fn set_height_px(&mut self, height: f64) {
        self.height = Some(px(height));
    }
}

/// One embedded frame registered in the host document.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedFrame {
    id: FrameId,
    /// Source URL the frame points at, when known.
    src: Option<String>,
    style: FrameStyle,
}

impl EmbeddedFrame {
    pub fn new(id: impl Into<FrameId>) -> Self {
        Self {
            id: id.into(),
            src: None,
            style: FrameStyle::default(),
        }
    }

    pub fn with_src(id: impl Into<FrameId>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: Some(src.into()),
            style: FrameStyle::default(),
        }
    }

    pub fn id(&self) -> &FrameId {
        &self.id
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn style(&self) -> &FrameStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut FrameStyle {
        &mut self.style
    }
}

/// The embedded frames the hosting document currently contains, keyed by
/// element id. Ordered so reports are deterministic.
#[derive(Debug, Default)]
pub struct FrameDocument {
    frames: BTreeMap<FrameId, EmbeddedFrame>,
}

impl FrameDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a frame, replacing any existing frame with the same id.
    pub fn insert(&mut self, frame: EmbeddedFrame) -> Option<EmbeddedFrame> {
        self.frames.insert(frame.id().clone(), frame)
    }

    pub fn get(&self, id: &FrameId) -> Option<&EmbeddedFrame> {
        self.frames.get(id)
    }

    pub fn get_mut(&mut self, id: &FrameId) -> Option<&mut EmbeddedFrame> {
        self.frames.get_mut(id)
    }

    pub fn remove(&mut self, id: &FrameId) -> Option<EmbeddedFrame> {
        self.frames.remove(id)
    }

    pub fn contains(&self, id: &FrameId) -> bool {
        self.frames.contains_key(id)
    }

    pub fn ids(&self) -> Vec<FrameId> {
        self.frames.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of every frame's current state as JSON, keyed by frame id.
    pub fn style_report(&self) -> Value {
        serde_json::to_value(&self.frames).unwrap_or(Value::Null)
    }
}

// =============================================================================
// TESTS
// =============================================================================
