// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{render_tab_row, Styles};
use crate::core::App;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border())
        .title(Span::styled(format!(" {} ", app.title), Styles::title()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(app.tab_bar_height), // Tab row
        Constraint::Min(0),                     // Selected tab details
        Constraint::Length(1),                  // Footer
    ])
    .split(inner);

    render_tab_row(f, app, chunks[0]);
    render_content(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
}

/// Render details of the selected tab
fn render_content(f: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected();
    let Some(item) = app.items().get(selected) else {
        return;
    };

    let heading = item
        .props()
        .label
        .clone()
        .filter(|label| !label.trim().is_empty())
        .or_else(|| app.selected_id().map(str::to_string))
        .unwrap_or_default();

    let mut lines = vec![Line::from(Span::styled(heading, Styles::content_heading()))];
    match app.layout_of(selected) {
        Some(layout) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "region {}x{} at ({}, {}), content width {}",
                    layout.area.width, layout.area.height, layout.area.x, layout.area.y, layout.content_width
                ),
                Styles::content_muted(),
            )));
        }
        None => lines.push(Line::from(Span::styled("not laid out yet", Styles::content_muted()))),
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP).border_style(Styles::border()))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render the key bindings
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for binding in &app.bindings {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(binding.key.clone(), Styles::binding_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(binding.description.clone(), Styles::binding_description()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
