// Configuration validation module

use crate::config::{load_config, AppConfig};
use std::collections::HashSet;
use std::path::PathBuf;
use tab_components::{Theme, ThemeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no tabs configured")]
    NoTabs,
    #[error("duplicate tab id '{0}'")]
    DuplicateId(String),
    #[error("tab '{0}': width must be greater than 0")]
    ZeroWidth(String),
    #[error("tab '{0}': max_lines must be at least 1")]
    ZeroMaxLines(String),
    #[error("more than one tab is marked selected ('{first}' and '{second}')")]
    MultipleSelected { first: String, second: String },
    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Check a loaded configuration and build its theme
pub fn validate_config(config: &AppConfig) -> Result<Theme, ConfigError> {
    if config.tabs.is_empty() {
        return Err(ConfigError::NoTabs);
    }

    let mut seen = HashSet::new();
    let mut selected: Option<&str> = None;
    for tab in &config.tabs {
        if !seen.insert(tab.id.as_str()) {
            return Err(ConfigError::DuplicateId(tab.id.clone()));
        }
        if tab.width == Some(0) {
            return Err(ConfigError::ZeroWidth(tab.id.clone()));
        }
        if tab.max_lines == Some(0) {
            return Err(ConfigError::ZeroMaxLines(tab.id.clone()));
        }
        if tab.selected {
            if let Some(first) = selected {
                return Err(ConfigError::MultipleSelected {
                    first: first.to_string(),
                    second: tab.id.clone(),
                });
            }
            selected = Some(&tab.id);
        }
        // Colors and styles are only checked by converting
        tab.to_tab_item_config()?;
    }

    let theme = match &config.theme {
        Some(yaml) => Theme::from_yaml(yaml)?,
        None => Theme::default(),
    };
    Ok(theme)
}

/// Load and validate configuration, returning it with its theme
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> anyhow::Result<(AppConfig, Theme)> {
    let config = load_config(config_path).inspect_err(|e| {
        tracing::error!(error = %e, "failed to load configuration");
    })?;

    match validate_config(&config) {
        Ok(theme) => Ok((config, theme)),
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            Err(e.into())
        }
    }
}
