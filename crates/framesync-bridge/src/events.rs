//! Synchronizer event types.

use framesync_common::FrameId;

/// Why a message produced no style write.
#[derive(Debug, Clone, PartialEq)]
pub enum IgnoreReason {
    /// Sender origin not in the allowlist.
    OriginBlocked { origin: String },
    /// Payload was not an object, or a present field had the wrong type.
    MalformedPayload,
    /// A field the active policy requires is absent.
    MissingField { field: &'static str },
    /// No frame with the target id is registered in the document.
    UnknownTarget { id: FrameId },
    /// Height fell outside the configured limits.
    OutOfRange { height: f64 },
}

/// Events recorded by a frame height synchronizer, one per handled
/// message. Drained by the embedding application.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// A height style was written.
    Applied {
        frame: FrameId,
        height: f64,
        style: String,
    },
    /// The message was ignored; the document is unchanged.
    Ignored { reason: IgnoreReason },
}

impl SyncEvent {
    pub fn is_applied(&self) -> bool {
        matches!(self, SyncEvent::Applied { .. })
    }
}
