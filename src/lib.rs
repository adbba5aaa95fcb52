// Tab Strip Library
// A terminal tab strip built from tab items

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Core infrastructure - application state and events
pub mod core;

// UI - views and the event loop
pub mod ui;

// Re-export commonly used items for convenience
pub use config::{load_config, AppConfig};
pub use config_validation::{load_and_validate_config, validate_config, ConfigError};
pub use self::core::{App, AppEvent, EventHandler};
