//! Override file loading

use super::merge::{apply_mode_override, ConfigOverrides};
use crate::catalog::get_config;
use crate::domain::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `mode` after file merging.
pub const MODE_ENV_VAR: &str = "VIDEO_CONFIG_MODE";

/// Section name override files may nest their fields under.
const SECTION: &str = "video-config";

pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<AppConfig> {
    let from_file = load_file_config(root, config_path)?;
    let env_mode = std::env::var(MODE_ENV_VAR).ok();
    let cfg = apply_mode_override(from_file, env_mode.as_deref())
        .with_context(|| format!("Invalid {} value", MODE_ENV_VAR))?;
    warn_if_nothing_selectable(&cfg);
    Ok(cfg)
}

/// Load and validate a single override file, ignoring the environment.
pub fn load_config_file(config_file: &Path) -> Result<AppConfig> {
    let cfg = merge_file(config_file)?;
    warn_if_nothing_selectable(&cfg);
    Ok(cfg)
}

fn load_file_config(root: &Path, config_path: Option<&Path>) -> Result<AppConfig> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("No override file found, using built-in config");
        return Ok(get_config().clone());
    };

    match merge_file(&config_file) {
        Ok(cfg) => Ok(cfg),
        Err(e) if config_path_provided => Err(e),
        Err(e) => {
            // Auto-discovered: warn and fall back to the built-in config
            tracing::warn!(
                "Failed to load auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(get_config().clone())
        }
    }
}

fn merge_file(config_file: &Path) -> Result<AppConfig> {
    let overrides = read_overrides(config_file)?;
    if overrides.is_empty() {
        tracing::debug!("{} sets no fields", config_file.display());
    }
    let cfg = overrides
        .apply(get_config())
        .with_context(|| format!("Invalid config: {}", config_file.display()))?;
    tracing::debug!("Loaded config from {}", config_file.display());
    Ok(cfg)
}

fn warn_if_nothing_selectable(cfg: &AppConfig) {
    if cfg.selectable_types().is_empty() {
        tracing::warn!("No video types are selectable in {} mode", cfg.mode);
    }
}

fn read_overrides(config_file: &Path) -> Result<ConfigOverrides> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "toml" => parse_toml_config(&content, config_file),
        "yaml" | "yml" => parse_yaml_config(&content, config_file),
        "json" => parse_json_config(&content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

/// A `[video-config]` section must be the only top-level key.
fn ensure_section_alone(top_level_keys: usize, config_file: &Path) -> Result<()> {
    if top_level_keys > 1 {
        anyhow::bail!(
            "Config file {} mixes a [{}] section with top-level fields",
            config_file.display(),
            SECTION
        );
    }
    Ok(())
}

/// Parse TOML overrides, supporting a nested [video-config] section.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<ConfigOverrides> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => {
            ensure_section_alone(raw.as_table().map_or(0, |t| t.len()), config_file)?;
            nested.clone()
        }
        None => raw,
    };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML overrides, supporting a nested video-config section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<ConfigOverrides> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    // An empty document parses to null
    if raw.is_null() {
        return Ok(ConfigOverrides::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => {
            ensure_section_alone(raw.as_mapping().map_or(0, |m| m.len()), config_file)?;
            nested.clone()
        }
        None => raw,
    };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn parse_json_config(content: &str, config_file: &Path) -> Result<ConfigOverrides> {
    let raw: serde_json::Value = serde_json::from_str(content)
        .with_context(|| format!("Invalid JSON syntax: {}", config_file.display()))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => {
            ensure_section_alone(raw.as_object().map_or(0, |o| o.len()), config_file)?;
            nested.clone()
        }
        None => raw,
    };

    serde_json::from_value(config_val)
        .with_context(|| format!("Invalid JSON config: {}", config_file.display()))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let candidates = [
        "video-config.toml",
        ".video-config.toml",
        "video-config.yaml",
        "video-config.yml",
        "video-config.json",
    ];

    candidates.iter().map(|candidate| root.join(candidate)).find(|path| path.exists())
}
