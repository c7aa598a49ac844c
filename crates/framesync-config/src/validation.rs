//! Full configuration validation.
//!
//! Validates the sync mode, height bounds, declared frame ids, origin
//! entries, and the logging level.

use std::collections::BTreeSet;

use crate::schema::FramesyncConfig;
use framesync_common::ConfigError;

const MODES: [&str; 2] = ["fixed", "addressed"];
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FramesyncConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // Sync policy
    if !MODES.contains(&config.sync.mode.as_str()) {
        errors.push(format!(
            "sync.mode = '{}' is not one of: fixed, addressed",
            config.sync.mode
        ));
    }
    if config.sync.mode == "fixed" && config.sync.fixed_target.trim().is_empty() {
        errors.push("sync.fixed_target must not be empty in fixed mode".into());
    }

    // Height bounds
    if let Some(min) = config.sync.min_height {
        if !min.is_finite() {
            errors.push(format!("sync.min_height = {min} is not a finite number"));
        }
    }
    if let Some(max) = config.sync.max_height {
        if !max.is_finite() {
            errors.push(format!("sync.max_height = {max} is not a finite number"));
        }
    }
    if let (Some(min), Some(max)) = (config.sync.min_height, config.sync.max_height) {
        if min.is_finite() && max.is_finite() && min > max {
            errors.push(format!(
                "sync.min_height = {min} is greater than sync.max_height = {max}"
            ));
        }
    }

    // Declared frames
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for decl in &config.frames.declare {
        if decl.id.trim().is_empty() {
            errors.push("frames.declare entry has an empty id".into());
        } else if !seen.insert(decl.id.as_str()) {
            errors.push(format!("frames.declare has duplicate id '{}'", decl.id));
        }
    }

    // Origins
    for entry in &config.origins.allow {
        if entry.trim().is_empty() {
            errors.push("origins.allow contains an empty entry".into());
        }
    }
    if config.origins.allow.is_empty() {
        // Valid but almost always unintended outside hardening setups.
        tracing::warn!("origins.allow is empty; every inbound message will be rejected");
    }

    // Logging
    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(format!(
            "logging.level = '{}' is not one of: trace, debug, info, warn, error",
            config.logging.level
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FrameDecl;

    #[test]
    fn default_config_validates() {
        let config = FramesyncConfig::default();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn catches_unknown_mode() {
        let mut config = FramesyncConfig::default();
        config.sync.mode = "sideways".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("sync.mode"));
    }

    #[test]
    fn catches_empty_fixed_target() {
        let mut config = FramesyncConfig::default();
        config.sync.fixed_target = "  ".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("sync.fixed_target"));
    }

    #[test]
    fn addressed_mode_does_not_require_fixed_target() {
        let mut config = FramesyncConfig::default();
        config.sync.mode = "addressed".into();
        config.sync.fixed_target = String::new();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn catches_inverted_height_bounds() {
        let mut config = FramesyncConfig::default();
        config.sync.min_height = Some(500.0);
        config.sync.max_height = Some(100.0);
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("sync.min_height"));
    }

    #[test]
    fn catches_nonfinite_bound() {
        let mut config = FramesyncConfig::default();
        config.sync.max_height = Some(f64::NAN);
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("sync.max_height"));
    }

    #[test]
    fn accepts_valid_height_bounds() {
        let mut config = FramesyncConfig::default();
        config.sync.min_height = Some(0.0);
        config.sync.max_height = Some(4000.0);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn catches_empty_frame_id() {
        let mut config = FramesyncConfig::default();
        config.frames.declare.push(FrameDecl {
            id: String::new(),
            src: None,
        });
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("empty id"));
    }

    #[test]
    fn catches_duplicate_frame_ids() {
        let mut config = FramesyncConfig::default();
        for _ in 0..2 {
            config.frames.declare.push(FrameDecl {
                id: "DemoIframe".into(),
                src: None,
            });
        }
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate id 'DemoIframe'"));
    }

    #[test]
    fn catches_empty_origin_entry() {
        let mut config = FramesyncConfig::default();
        config.origins.allow.push("".into());
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("origins.allow"));
    }

    #[test]
    fn catches_unknown_log_level() {
        let mut config = FramesyncConfig::default();
        config.logging.level = "verbose".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("logging.level"));
    }

    #[test]
    fn collects_all_errors_joined() {
        let mut config = FramesyncConfig::default();
        config.sync.mode = "sideways".into();
        config.logging.level = "verbose".into();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("sync.mode"));
        assert!(err.contains("logging.level"));
        assert!(err.contains("; "));
    }
}
