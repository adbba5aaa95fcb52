// Theme
// Injected styling and per-component default props for tab items

use std::fs;
use std::path::{Path, PathBuf};

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use thiserror::Error;

use crate::elements::tab_item::TabItemConfig;
use crate::utilities::parse_color;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid color '{value}' for {field}")]
    InvalidColor { field: String, value: String },
    #[error("max_lines for {field} must be at least 1")]
    InvalidMaxLines { field: String },
}

/// Spacing in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    /// Columns of padding on each side of the item content
    pub horizontal: u16,
    /// Columns between the icon and a non-empty label
    pub icon_gap: u16,
    /// Rows left blank above and below the divider
    pub divider_margin: u16,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            horizontal: 1,
            icon_gap: 1,
            divider_margin: 1,
        }
    }
}

/// Props a theme supplies when the caller leaves them unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabItemDefaults {
    pub icon_color: Option<Color>,
    pub icon_selected_color: Option<Color>,
    pub max_lines: Option<u16>,
    pub show_divider: Option<bool>,
}

/// Theme and prop resolution consumed by tab items
pub trait ThemeProvider {
    /// Base label style
    fn label_style(&self) -> Style;

    /// Style layered on the label when the item is selected
    fn selected_label_style(&self) -> Style;

    fn divider_style(&self) -> Style;

    fn spacing(&self) -> Spacing;

    /// Fill props the caller left unset from the theme's component defaults
    fn resolve_props(&self, props: TabItemConfig) -> TabItemConfig {
        props
    }
}

/// Concrete theme for tab items
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub label: Style,
    pub label_selected: Style,
    pub divider: Style,
    pub spacing: Spacing,
    pub tab_item: TabItemDefaults,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: Style::default().fg(Color::Gray),
            label_selected: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            divider: Style::default().fg(Color::DarkGray),
            spacing: Spacing::default(),
            tab_item: TabItemDefaults::default(),
        }
    }
}

impl ThemeProvider for Theme {
    fn label_style(&self) -> Style {
        self.label
    }

    fn selected_label_style(&self) -> Style {
        self.label_selected
    }

    fn divider_style(&self) -> Style {
        self.divider
    }

    fn spacing(&self) -> Spacing {
        self.spacing
    }

    fn resolve_props(&self, mut props: TabItemConfig) -> TabItemConfig {
        let defaults = &self.tab_item;
        if props.icon_color.is_none() {
            props.icon_color = defaults.icon_color;
        }
        if props.icon_selected_color.is_none() {
            props.icon_selected_color = defaults.icon_selected_color;
        }
        if props.max_lines.is_none() {
            props.max_lines = defaults.max_lines;
        }
        if props.show_divider.is_none() {
            props.show_divider = defaults.show_divider;
        }
        props
    }
}

impl Theme {
    /// Load a theme from a YAML file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let contents = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ThemeError> {
        let yaml: ThemeYaml = serde_yaml::from_str(contents)?;
        Self::from_yaml(&yaml)
    }

    /// Convert a parsed YAML document, keeping defaults for anything it omits
    pub fn from_yaml(yaml: &ThemeYaml) -> Result<Self, ThemeError> {
        let mut theme = Theme::default();

        if let Some(label) = &yaml.label {
            theme.label = label.apply_to(theme.label, "label")?;
        }
        if let Some(selected) = &yaml.selected_label {
            theme.label_selected = selected.apply_to(theme.label_selected, "selected_label")?;
        }
        if let Some(divider) = &yaml.divider {
            theme.divider = divider.apply_to(theme.divider, "divider")?;
        }
        if let Some(spacing) = &yaml.spacing {
            theme.spacing = Spacing {
                horizontal: spacing.horizontal.unwrap_or(theme.spacing.horizontal),
                icon_gap: spacing.icon_gap.unwrap_or(theme.spacing.icon_gap),
                divider_margin: spacing.divider_margin.unwrap_or(theme.spacing.divider_margin),
            };
        }
        if let Some(defaults) = &yaml.tab_item {
            if defaults.max_lines == Some(0) {
                return Err(ThemeError::InvalidMaxLines {
                    field: "tab_item".to_string(),
                });
            }
            theme.tab_item = TabItemDefaults {
                icon_color: parse_optional_color(defaults.icon_color.as_deref(), "tab_item.icon_color")?,
                icon_selected_color: parse_optional_color(
                    defaults.icon_selected_color.as_deref(),
                    "tab_item.icon_selected_color",
                )?,
                max_lines: defaults.max_lines,
                show_divider: defaults.show_divider,
            };
        }

        Ok(theme)
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Theme document from YAML
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeYaml {
    pub label: Option<StyleYaml>,
    pub selected_label: Option<StyleYaml>,
    pub divider: Option<StyleYaml>,
    pub spacing: Option<SpacingYaml>,
    pub tab_item: Option<TabItemDefaultsYaml>,
}

/// Text style from YAML; unset fields keep the underlying style
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleYaml {
    /// Foreground color (named or "#rrggbb")
    pub color: Option<String>,
    /// Background color (named or "#rrggbb")
    pub background: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
}

impl StyleYaml {
    /// Build a style from scratch
    pub fn to_style(&self, field: &str) -> Result<Style, ThemeError> {
        self.apply_to(Style::default(), field)
    }

    /// Layer this YAML style over `base`
    pub fn apply_to(&self, base: Style, field: &str) -> Result<Style, ThemeError> {
        let mut style = base;
        if let Some(fg) = parse_optional_color(self.color.as_deref(), &format!("{field}.color"))? {
            style = style.fg(fg);
        }
        if let Some(bg) = parse_optional_color(self.background.as_deref(), &format!("{field}.background"))? {
            style = style.bg(bg);
        }
        for (flag, modifier) in [
            (self.bold, Modifier::BOLD),
            (self.italic, Modifier::ITALIC),
            (self.underlined, Modifier::UNDERLINED),
        ] {
            style = match flag {
                Some(true) => style.add_modifier(modifier),
                Some(false) => style.remove_modifier(modifier),
                None => style,
            };
        }
        Ok(style)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpacingYaml {
    pub horizontal: Option<u16>,
    pub icon_gap: Option<u16>,
    pub divider_margin: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TabItemDefaultsYaml {
    pub icon_color: Option<String>,
    pub icon_selected_color: Option<String>,
    pub max_lines: Option<u16>,
    pub show_divider: Option<bool>,
}

/// Parse an optional color string, naming the offending field on failure
pub fn parse_optional_color(value: Option<&str>, field: &str) -> Result<Option<Color>, ThemeError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_color(raw).map(Some).ok_or_else(|| ThemeError::InvalidColor {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}
