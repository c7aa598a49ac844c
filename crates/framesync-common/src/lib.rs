pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, FramesyncError};
pub use id::new_correlation_id;
pub use types::FrameId;

pub type Result<T> = std::result::Result<T, FramesyncError>;
