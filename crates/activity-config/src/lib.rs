//! activity-config
//!
//! User preferences for the activity form shell and their JSON persistence.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::{default_base_dir, ConfigManager, HOME_ENV};
pub use model::{Config, SinkKind, CONFIG_KEYS};
