//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level for framesync's own spans and events:
    /// `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
    /// Log every inbound envelope at trace level before dispatch.
    pub trace_messages: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            trace_messages: false,
        }
    }
}
