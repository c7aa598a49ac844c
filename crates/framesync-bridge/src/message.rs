//! Cross-document message envelope and payload decoding.
//!
//! Size reports arrive untyped. [`ResizeMessage::from_value`] is the single
//! schema step that turns a payload into typed fields before any policy
//! logic runs; nothing downstream touches raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use framesync_common::FrameId;

/// One delivery on the cross-document channel: the sender origin as
/// reported by the transport, plus the untyped payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEnvelope {
    /// Sender origin, e.g. `https://docs.example.org`.
    pub origin: String,
    /// The message payload (arbitrary JSON).
    pub data: Value,
}

impl MessageEnvelope {
    pub fn new(origin: impl Into<String>, data: Value) -> Self {
        Self {
            origin: origin.into(),
            data,
        }
    }

    /// Parse an envelope from a raw JSON string (one feed line).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// A size report decoded from a message payload.
///
/// All fields are optional at this stage; each target policy applies its
/// own presence rule. Types are strict: a field that is present with the
/// wrong JSON type fails the whole decode.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeMessage {
    /// Reported width. Advisory only; never used to mutate anything.
    pub width: Option<f64>,
    /// Reported height. Drives the style write once admitted.
    pub height: Option<f64>,
    /// Target frame id. Ignored under the fixed-target policy.
    pub id: Option<FrameId>,
}

impl ResizeMessage {
    /// Decode a payload into a size report.
    ///
    /// Returns `None` when the payload is not a JSON object or a present
    /// field has the wrong type. Unknown fields are ignored, matching what
    /// a hosting page tolerates from its embeds.
    pub fn from_value(data: &Value) -> Option<Self> {
        let obj = data.as_object()?;

        let width = match obj.get("width") {
            Some(v) => Some(v.as_f64()?),
            None => None,
        };
        let height = match obj.get("height") {
            Some(v) => Some(v.as_f64()?),
            None => None,
        };
        let id = match obj.get("id") {
            Some(v) => Some(FrameId::new(v.as_str()?)),
            None => None,
        };

        Some(Self { width, height, id })
    }
}
