//! Core data types: operating mode, video type entries and the application config.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Values selectable in [`Mode::Simple`]; the minimal mode only exposes the
/// "变装" category.
pub const SIMPLE_MODE_TYPES: &[&str] = &["BianZhuang"];

/// Application-wide switch between the minimal and the full category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Mode {
    #[default]
    Simple,
    Premium,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Simple, Mode::Premium];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Simple => "simple",
            Mode::Premium => "premium",
        }
    }

    /// Premium mode lets the user switch between every category.
    pub fn allows_all_types(&self) -> bool {
        matches!(self, Mode::Premium)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownMode(trimmed.to_string()))
    }
}

impl TryFrom<String> for Mode {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One selectable category: `value` is the stored key, `label` the display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoTypeEntry {
    pub value: String,
    pub label: String,
}

impl VideoTypeEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// The full application configuration handed to the host.
///
/// `video_types` is in display order; hosts render it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub mode: Mode,
    #[serde(alias = "video_types")]
    pub video_types: Vec<VideoTypeEntry>,
}

impl AppConfig {
    pub fn new(mode: Mode, video_types: Vec<VideoTypeEntry>) -> Self {
        Self { mode, video_types }
    }

    /// Check the catalog invariants: non-empty, no blank fields, unique values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.video_types.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(self.video_types.len());
        for (index, entry) in self.video_types.iter().enumerate() {
            if entry.value.trim().is_empty() {
                return Err(ConfigError::EmptyField { index, field: "value" });
            }
            if entry.label.trim().is_empty() {
                return Err(ConfigError::EmptyField { index, field: "label" });
            }
            if !seen.insert(entry.value.as_str()) {
                return Err(ConfigError::DuplicateValue(entry.value.clone()));
            }
        }

        Ok(())
    }

    pub fn find(&self, value: &str) -> Option<&VideoTypeEntry> {
        self.video_types.iter().find(|entry| entry.value == value)
    }

    /// Entries the user may pick in the current mode, in display order.
    pub fn selectable_types(&self) -> Vec<&VideoTypeEntry> {
        self.video_types
            .iter()
            .filter(|entry| {
                self.mode.allows_all_types() || SIMPLE_MODE_TYPES.contains(&entry.value.as_str())
            })
            .collect()
    }

    pub fn with_mode(&self, mode: Mode) -> Self {
        Self { mode, video_types: self.video_types.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AppConfig {
        AppConfig::new(
            Mode::Simple,
            vec![
                VideoTypeEntry::new("jk", "JK制服"),
                VideoTypeEntry::new("BianZhuang", "变装"),
                VideoTypeEntry::new("HanFu", "汉服"),
            ],
        )
    }

    #[test]
    fn test_mode_parse_accepts_known_literals() {
        assert_eq!("simple".parse::<Mode>(), Ok(Mode::Simple));
        assert_eq!(" Premium ".parse::<Mode>(), Ok(Mode::Premium));
    }

    #[test]
    fn test_mode_parse_rejects_unknown() {
        assert_eq!("vip".parse::<Mode>(), Err(ConfigError::UnknownMode("vip".to_string())));
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Premium).expect("json"), "\"premium\"");
        let mode: Mode = serde_json::from_str("\"SIMPLE\"").expect("mode");
        assert_eq!(mode, Mode::Simple);
        assert!(serde_json::from_str::<Mode>("\"gold\"").is_err());
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let value = serde_json::to_value(sample()).expect("json");
        assert_eq!(value["mode"], "simple");
        assert_eq!(value["videoTypes"][0]["value"], "jk");
        assert_eq!(value["videoTypes"][0]["label"], "JK制服");
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut cfg = sample();
        cfg.video_types.push(VideoTypeEntry::new("jk", "again"));
        assert_eq!(cfg.validate(), Err(ConfigError::DuplicateValue("jk".to_string())));
    }

    #[test]
    fn test_validate_rejects_blank_fields_and_empty_catalog() {
        let mut cfg = sample();
        cfg.video_types[1].label = "  ".to_string();
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyField { index: 1, field: "label" }));

        let empty = AppConfig::new(Mode::Premium, Vec::new());
        assert_eq!(empty.validate(), Err(ConfigError::EmptyCatalog));
    }

    #[test]
    fn test_selectable_types_by_mode() {
        let cfg = sample();
        let simple: Vec<&str> = cfg.selectable_types().iter().map(|e| e.value.as_str()).collect();
        assert_eq!(simple, vec!["BianZhuang"]);

        let premium = cfg.with_mode(Mode::Premium);
        let all: Vec<&str> = premium.selectable_types().iter().map(|e| e.value.as_str()).collect();
        assert_eq!(all, vec!["jk", "BianZhuang", "HanFu"]);
    }

    #[test]
    fn test_find_is_exact_match() {
        let cfg = sample();
        assert_eq!(cfg.find("HanFu").map(|e| e.label.as_str()), Some("汉服"));
        assert!(cfg.find("hanfu").is_none());
    }
}
