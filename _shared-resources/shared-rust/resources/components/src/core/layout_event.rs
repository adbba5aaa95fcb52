// Layout Event
// Descriptor handed to `on_layout` callbacks once a tab item has been placed

use ratatui::layout::Rect;
use ratatui::style::Style;

use super::rect_handle::RectMetrics;

/// Result of laying out a tab item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEvent {
    /// Item identifier (the item's `test_id`), if any
    pub id: Option<String>,
    /// Region the item occupies
    pub area: RectMetrics,
    /// Natural width of the content (padding, icon, gap, label or children)
    pub content_width: u16,
    /// Label style in effect when the layout happened
    pub label_style: Style,
}

impl LayoutEvent {
    pub fn new(id: Option<String>, area: Rect, content_width: u16, label_style: Style) -> Self {
        Self {
            id,
            area: area.into(),
            content_width,
            label_style,
        }
    }

    /// The laid-out region as a ratatui rectangle
    pub fn rect(&self) -> Rect {
        self.area.into()
    }
}
