// Configuration loading module

use anyhow::{Context, Result};
use ratatui::text::{Line, Text};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tab_components::{parse_optional_color, Icon, StyleYaml, TabItemConfig, ThemeError, ThemeYaml};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub theme: Option<ThemeYaml>,
    pub tabs: Vec<TabConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_mouse_enabled")]
    pub mouse_enabled: bool,
    /// Rows given to the tab row, indicator line included
    #[serde(default = "default_tab_bar_height")]
    pub tab_bar_height: u16,
    #[serde(default)]
    pub bindings: Vec<BindingConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabConfigYaml {
    /// Tab ID (also the item's test id and registry name)
    pub id: String,
    pub label: Option<String>,
    /// Icon glyph
    pub icon: Option<String>,
    pub icon_color: Option<String>,
    pub icon_selected_color: Option<String>,
    pub label_style: Option<StyleYaml>,
    pub selected_label_style: Option<StyleYaml>,
    pub max_lines: Option<u16>,
    pub show_divider: Option<bool>,
    pub width: Option<u16>,
    /// Content shown when the tab has no label
    pub badge: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_mouse_enabled() -> bool {
    true
}

fn default_tab_bar_height() -> u16 {
    3
}

impl TabConfigYaml {
    /// Convert to tab item props (callbacks are attached by the app)
    pub fn to_tab_item_config(&self) -> Result<TabItemConfig, ThemeError> {
        let field = |name: &str| format!("tabs.{}.{}", self.id, name);

        let mut config = TabItemConfig::new().test_id(self.id.clone());
        config.icon = self.icon.as_deref().map(Icon::new);
        config.icon_color = parse_optional_color(self.icon_color.as_deref(), &field("icon_color"))?;
        config.icon_selected_color =
            parse_optional_color(self.icon_selected_color.as_deref(), &field("icon_selected_color"))?;
        config.label = self.label.clone();
        config.label_style = self
            .label_style
            .as_ref()
            .map(|style| style.to_style(&field("label_style")))
            .transpose()?;
        config.selected_label_style = self
            .selected_label_style
            .as_ref()
            .map(|style| style.to_style(&field("selected_label_style")))
            .transpose()?;
        config.max_lines = self.max_lines;
        config.show_divider = self.show_divider;
        config.width = self.width;
        config.children = self
            .badge
            .as_ref()
            .map(|badge| Text::from(Line::raw(badge.clone())));
        config.selected = self.selected;
        Ok(config)
    }
}

/// Default config location: src/config.yaml next to the manifest
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);
    parse_config_file(&path)
}

fn parse_config_file(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: AppConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};
    use std::io::Write;

    const MINIMAL: &str = r#"
application:
  title: "Demo"
tabs:
  - id: home
    label: Home
"#;

    #[test]
    fn test_application_defaults() {
        let config: AppConfig = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(config.application.tick_rate_ms, 50);
        assert!(config.application.mouse_enabled);
        assert_eq!(config.application.tab_bar_height, 3);
        assert!(config.theme.is_none());
        assert_eq!(config.tabs.len(), 1);
        assert!(!config.tabs[0].selected);
    }

    #[test]
    fn test_tab_conversion() {
        let tab: TabConfigYaml = serde_yaml::from_str(
            r##"
id: settings
label: Settings
icon: "*"
icon_color: yellow
selected_label_style:
  color: "#ff8800"
  bold: true
max_lines: 2
width: 16
"##,
        )
        .unwrap();

        let config = tab.to_tab_item_config().unwrap();
        assert_eq!(config.test_id.as_deref(), Some("settings"));
        assert_eq!(config.icon.as_ref().map(Icon::symbol), Some("*"));
        assert_eq!(config.icon_color, Some(Color::Yellow));
        let selected = config.selected_label_style.unwrap();
        assert_eq!(selected.fg, Some(Color::Rgb(0xff, 0x88, 0x00)));
        assert!(selected.add_modifier.contains(Modifier::BOLD));
        assert_eq!(config.max_lines, Some(2));
        assert_eq!(config.fixed_width(), Some(16));
        assert!(config.children.is_none());
    }

    #[test]
    fn test_badge_becomes_children() {
        let tab: TabConfigYaml = serde_yaml::from_str("id: alerts\nbadge: \"3\"\n").unwrap();
        let config = tab.to_tab_item_config().unwrap();
        assert!(!config.has_label());
        assert_eq!(config.children.unwrap().width(), 1);
    }

    #[test]
    fn test_invalid_icon_color() {
        let tab: TabConfigYaml = serde_yaml::from_str("id: x\nicon_color: mauve\n").unwrap();
        let err = tab.to_tab_item_config().unwrap_err();
        assert!(err.to_string().contains("tabs.x.icon_color"));
    }

    #[test]
    fn test_unknown_tab_key_rejected() {
        let parsed: Result<TabConfigYaml, _> = serde_yaml::from_str("id: x\ncolour: red\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.application.title, "Demo");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = load_config(None).unwrap();
        assert!(!config.tabs.is_empty());
        for tab in &config.tabs {
            tab.to_tab_item_config().unwrap();
        }
    }
}
