//! The frame height synchronizer.
//!
//! One registration on the inbound channel; every delivery runs the same
//! pipeline to completion: origin gate, payload decode, policy admission,
//! target lookup, style write. Each message is processed independently and
//! statelessly. Soft failures are logged and recorded as [`SyncEvent`]s;
//! nothing is ever raised back across the listener boundary.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use framesync_common::{new_correlation_id, FrameId};

use crate::channel::{MessageChannel, Subscription};
use crate::document::FrameDocument;
use crate::events::{IgnoreReason, SyncEvent};
use crate::message::{MessageEnvelope, ResizeMessage};
use crate::origin::OriginPolicy;

// =============================================================================
// TARGET POLICY
// =============================================================================

/// How the synchronizer resolves which frame a message targets.
///
/// The two policies deliberately differ in required fields as well as in
/// target resolution; both observed behaviors ship side by side rather
/// than a merged guess.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetPolicy {
    /// Every admitted message resizes the one configured frame. The
    /// payload's `id` field is ignored; only `height` is required.
    Fixed(FrameId),
    /// The payload's `id` names the frame. `width`, `height`, and `id`
    /// must all be present or the message is ignored.
    Addressed,
}

// =============================================================================
// HEIGHT LIMITS
// =============================================================================

/// Optional bounds on admitted heights. Unset bounds admit everything,
/// so the default writes any numeric height verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeightLimits {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl HeightLimits {
    pub fn admits(&self, height: f64) -> bool {
        if let Some(min) = self.min {
            if height < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if height > max {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// SYNCHRONIZER
// =============================================================================

/// Reacts to inbound cross-document messages by resizing a frame in the
/// host document. Stateless across messages; the document is the only
/// shared resource it touches, and only with idempotent style writes.
pub struct FrameHeightSynchronizer {
    policy: TargetPolicy,
    origins: OriginPolicy,
    limits: HeightLimits,
    document: Arc<Mutex<FrameDocument>>,
    events: Arc<Mutex<Vec<SyncEvent>>>,
}

impl FrameHeightSynchronizer {
    pub fn new(
        policy: TargetPolicy,
        origins: OriginPolicy,
        document: Arc<Mutex<FrameDocument>>,
    ) -> Self {
        Self {
            policy,
            origins,
            limits: HeightLimits::default(),
            document,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_limits(mut self, limits: HeightLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn policy(&self) -> &TargetPolicy {
        &self.policy
    }

    /// Register this synchronizer on a channel. The returned handle owns
    /// the registration; unsubscribe it on component teardown.
    pub fn attach(self: &Arc<Self>, channel: &MessageChannel) -> Subscription {
        let sync = Arc::clone(self);
        channel.subscribe(move |envelope| sync.handle(envelope))
    }

    /// Drain all events recorded since the last drain.
    pub fn drain_events(&self) -> Vec<SyncEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Handle one inbound envelope, run to completion.
    ///
    /// Returns nothing and never panics on malformed input; outcomes are
    /// observable through the document and the drained events.
    pub fn handle(&self, envelope: &MessageEnvelope) {
        let correlation = new_correlation_id();

        if !self.origins.allows(&envelope.origin) {
            warn!(
                correlation = %correlation,
                origin = %envelope.origin,
                "message rejected: origin not allowed"
            );
            self.record(SyncEvent::Ignored {
                reason: IgnoreReason::OriginBlocked {
                    origin: envelope.origin.clone(),
                },
            });
            return;
        }

        let msg = match ResizeMessage::from_value(&envelope.data) {
            Some(m) => m,
            None => {
                warn!(
                    correlation = %correlation,
                    origin = %envelope.origin,
                    "message rejected: malformed payload"
                );
                self.record(SyncEvent::Ignored {
                    reason: IgnoreReason::MalformedPayload,
                });
                return;
            }
        };

        debug!(
            correlation = %correlation,
            width = ?msg.width,
            height = ?msg.height,
            "size report received"
        );

        let (target, height) = match self.admit(&msg) {
            Ok(admitted) => admitted,
            Err(reason) => {
                debug!(correlation = %correlation, ?reason, "message ignored");
                self.record(SyncEvent::Ignored { reason });
                return;
            }
        };

        if !self.limits.admits(height) {
            warn!(
                correlation = %correlation,
                frame = %target,
                height,
                "message rejected: height out of range"
            );
            self.record(SyncEvent::Ignored {
                reason: IgnoreReason::OutOfRange { height },
            });
            return;
        }

        let written = {
            let Ok(mut document) = self.document.lock() else {
                warn!(correlation = %correlation, "document lock poisoned; message dropped");
                return;
            };
            match document.get_mut(&target) {
                Some(frame) => {
                    frame.style_mut().set_height_px(height);
                    frame.style().height.clone()
                }
                None => None,
            }
        };

        match written {
            Some(style) => {
                debug!(
                    correlation = %correlation,
                    frame = %target,
                    height,
                    style = %style,
                    "frame height applied"
                );
                self.record(SyncEvent::Applied {
                    frame: target,
                    height,
                    style,
                });
            }
            None => {
                debug!(
                    correlation = %correlation,
                    frame = %target,
                    "target frame not registered"
                );
                self.record(SyncEvent::Ignored {
                    reason: IgnoreReason::UnknownTarget { id: target },
                });
            }
        }
    }

    /// Apply the active policy's presence rules. Returns the target frame
    /// and the admitted height.
    fn admit(&self, msg: &ResizeMessage) -> Result<(FrameId, f64), IgnoreReason> {
        match &self.policy {
            TargetPolicy::Fixed(frame) => {
                let height = msg
                    .height
                    .ok_or(IgnoreReason::MissingField { field: "height" })?;
                Ok((frame.clone(), height))
            }
            TargetPolicy::Addressed => {
                if msg.width.is_none() {
                    return Err(IgnoreReason::MissingField { field: "width" });
                }
                let height = msg
                    .height
                    .ok_or(IgnoreReason::MissingField { field: "height" })?;
                let id = msg
                    .id
                    .clone()
                    .ok_or(IgnoreReason::MissingField { field: "id" })?;
                Ok((id, height))
            }
        }
    }

    fn record(&self, event: SyncEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
