// Tab Row
// Lays out the tab items side by side and underlines the selected one

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    Frame,
};
use tab_components::{LayoutEvent, TabItem};

use super::styles::{Styles, INDICATOR_SYMBOL};
use crate::core::App;

/// Render every tab item into `area`
///
/// Items share the top rows; the bottom row holds the selection indicator
/// when the area is taller than one row. Fixed-width items keep their width
/// and the rest split what remains.
pub fn render_tab_row(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width == 0 || area.height == 0 || app.items().is_empty() {
        return;
    }

    let (items_area, indicator_row) = if area.height > 1 {
        (
            Rect {
                height: area.height - 1,
                ..area
            },
            Some(area.bottom() - 1),
        )
    } else {
        (area, None)
    };

    let constraints: Vec<Constraint> = app.items().iter().map(TabItem::constraint).collect();
    let regions = Layout::horizontal(constraints)
        .flex(Flex::Start)
        .split(items_area);

    let mut events = Vec::new();
    for (item, region) in app.items_mut().iter_mut().zip(regions.iter()) {
        if let Some(event) = item.render_frame(f, *region) {
            events.push(event);
        }
    }
    for event in &events {
        app.record_layout(event);
    }

    let Some(row) = indicator_row else {
        return;
    };
    let selected = app.selected();
    if let (Some(layout), Some(item)) = (app.layout_of(selected), app.items().get(selected)) {
        render_indicator(f.buffer_mut(), &layout, row, item);
    }
}

/// Underline as wide as the item's content, centered in its region
fn render_indicator(buf: &mut Buffer, layout: &LayoutEvent, row: u16, item: &TabItem) {
    let region = layout.rect();
    let width = layout.content_width.min(region.width);
    let x = region.x + (region.width - width) / 2;
    let line = Rect::new(x, row, width, 1).intersection(buf.area);
    let style = Styles::indicator(item.label_style());

    for col in line.left()..line.right() {
        buf[(col, row)].set_symbol(INDICATOR_SYMBOL).set_style(style);
    }
}
