//! Merging partial overrides onto the built-in config

use crate::domain::{AppConfig, Mode, VideoTypeEntry};
use crate::error::ConfigError;
use serde::Deserialize;

/// Fields an override file may set. Anything left out keeps its built-in value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default, alias = "video_types")]
    pub video_types: Option<Vec<VideoTypeEntry>>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.video_types.is_none()
    }

    /// Apply onto `base` and validate the result.
    pub fn apply(self, base: &AppConfig) -> Result<AppConfig, ConfigError> {
        let merged = AppConfig::new(
            self.mode.unwrap_or(base.mode),
            self.video_types.unwrap_or_else(|| base.video_types.clone()),
        );
        merged.validate()?;
        Ok(merged)
    }
}

/// Replace `config.mode` with a raw mode string, if one is given.
pub fn apply_mode_override(config: AppConfig, raw: Option<&str>) -> Result<AppConfig, ConfigError> {
    match raw {
        Some(raw) => {
            let mode: Mode = raw.parse()?;
            tracing::debug!("Mode overridden to {}", mode);
            Ok(config.with_mode(mode))
        }
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_config;

    #[test]
    fn test_empty_overrides_keep_builtin() {
        let overrides = ConfigOverrides::default();
        assert!(overrides.is_empty());
        let merged = overrides.apply(get_config()).expect("merge");
        assert_eq!(&merged, get_config());
    }

    #[test]
    fn test_mode_only_override_keeps_catalog() {
        let overrides = ConfigOverrides { mode: Some(Mode::Premium), video_types: None };
        let merged = overrides.apply(get_config()).expect("merge");
        assert_eq!(merged.mode, Mode::Premium);
        assert_eq!(merged.video_types, get_config().video_types);
    }

    #[test]
    fn test_invalid_catalog_override_fails() {
        let overrides = ConfigOverrides {
            mode: None,
            video_types: Some(vec![VideoTypeEntry::new("a", "A"), VideoTypeEntry::new("a", "B")]),
        };
        assert_eq!(
            overrides.apply(get_config()),
            Err(ConfigError::DuplicateValue("a".to_string()))
        );
    }

    #[test]
    fn test_apply_mode_override() {
        let cfg = apply_mode_override(get_config().clone(), Some("premium")).expect("override");
        assert_eq!(cfg.mode, Mode::Premium);

        let untouched = apply_mode_override(get_config().clone(), None).expect("no override");
        assert_eq!(untouched.mode, Mode::Simple);

        assert!(apply_mode_override(get_config().clone(), Some("trial")).is_err());
    }
}
