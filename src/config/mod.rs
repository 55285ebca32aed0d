//! Configuration loading and merging
//!
//! Starts from the built-in catalog, then applies an optional override file and
//! the environment with precedence (Env > File > Built-in).

pub mod loader;
pub mod merge;

pub use loader::{load_config, load_config_file, MODE_ENV_VAR};
pub use merge::{apply_mode_override, ConfigOverrides};
