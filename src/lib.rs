//! video-config: mode switch and video category catalog
//!
//! Exposes the immutable application configuration consumed by a short-video
//! browsing host: an operating [`Mode`] and the ordered list of
//! [`VideoTypeEntry`] categories the user can filter by.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use catalog::get_config;
pub use config::load_config;
pub use domain::{AppConfig, Mode, VideoTypeEntry};
pub use error::ConfigError;
