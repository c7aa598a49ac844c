//! TOML config file loading and creation.

use crate::schema::FramesyncConfig;
use crate::validation;
use framesync_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<FramesyncConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: FramesyncConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    // Validate and warn on errors, but still return a usable config
    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(FramesyncConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/framesync/config.toml`
/// On Linux: `~/.config/framesync/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<FramesyncConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(FramesyncConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("framesync").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let content = default_config_toml();

    std::fs::write(path, content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Generate the default TOML config content with comments.
fn default_config_toml() -> String {
    r##"# framesync configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[origins]
# Origins allowed to post size reports, compared case-insensitively with
# trailing slashes stripped, e.g.
#   allow = ["https://docs.example.org"]
# The single entry "*" allows any origin. An empty list rejects every
# message.
allow = []

[sync]
# mode = "fixed"              # fixed, addressed
# fixed_target = "DemoIframe" # frame resized in fixed mode
# min_height = 0.0            # unset admits any height
# max_height = 4000.0

# Frames present in the host document. Each entry needs an id; src is
# informational.
# [[frames.declare]]
# id = "DemoIframe"
# src = "https://docs.example.org/interpreter"

[logging]
# level = "info"              # trace, debug, info, warn, error
# trace_messages = false      # log every inbound envelope at trace level
"##
    .to_string()
}
