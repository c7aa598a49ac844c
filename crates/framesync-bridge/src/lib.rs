//! Host-side frame height synchronization.
//!
//! Embedded frames post `{ width, height, id }` size reports to their
//! hosting document. This crate validates the sender origin, decodes the
//! payload through one schema step, and writes the pixel height onto the
//! matching frame in the host document model. Both handler policies are
//! shipped side by side:
//! - **fixed target**: every admitted message resizes one configured frame
//! - **addressed**: the message's `id` field names the frame, and all of
//!   `width`, `height`, `id` must be present

pub mod channel;
pub mod document;
pub mod events;
pub mod message;
pub mod origin;
pub mod script;
pub mod sync;

pub use channel::{MessageChannel, Subscription, SubscriptionId};
pub use document::{px, EmbeddedFrame, FrameDocument, FrameStyle};
pub use events::{IgnoreReason, SyncEvent};
pub use message::{MessageEnvelope, ResizeMessage};
pub use origin::OriginPolicy;
pub use script::{apply_height_script, report_script};
pub use sync::{FrameHeightSynchronizer, HeightLimits, TargetPolicy};
