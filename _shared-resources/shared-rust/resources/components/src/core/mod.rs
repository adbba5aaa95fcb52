// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod layout_event;
pub mod rect_handle;
pub mod theme;

pub use layout_event::LayoutEvent;
pub use rect_handle::{RectHandle, RectMetrics, RectRegistry};
pub use theme::{
    parse_optional_color, Spacing, StyleYaml, TabItemDefaults, Theme, ThemeError, ThemeProvider,
    ThemeYaml,
};
