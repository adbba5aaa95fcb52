// UI Styles
// Color schemes and styling for the tab strip host

use ratatui::style::{Color, Modifier, Style};

/// Thick line drawn under the selected tab
pub const INDICATOR_SYMBOL: &str = "━";

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Frame ===

    pub fn title() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // === Footer ===

    pub fn binding_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn binding_description() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Content ===

    pub fn content_heading() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn content_muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Indicator style follows the selected label's foreground
    pub fn indicator(label_style: Style) -> Style {
        Style::default().fg(label_style.fg.unwrap_or(Color::Cyan))
    }
}
