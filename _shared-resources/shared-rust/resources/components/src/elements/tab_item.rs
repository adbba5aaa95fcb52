// Tab Item Component
// One selectable entry of a tab bar: tinted icon, label (or child content) and optional divider

use std::fmt;
use std::rc::Rc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Text},
    widgets::{Paragraph, Widget},
    Frame,
};
use tracing::debug;

use crate::core::{LayoutEvent, ThemeProvider};
use crate::utilities::{centered_rect, color_from_style, display_width, wrap_and_truncate};

pub type PressHandler = Box<dyn FnMut()>;
pub type LayoutHandler = Box<dyn FnMut(&LayoutEvent)>;

/// Monochrome glyph drawn in front of the label and tinted at render time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    symbol: String,
}

impl Icon {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Width in terminal columns
    pub fn width(&self) -> u16 {
        display_width(&self.symbol)
    }
}

/// Props of a tab item
///
/// Everything is optional; `max_lines` falls back to 1 and `selected` to false.
#[derive(Default)]
pub struct TabItemConfig {
    pub icon: Option<Icon>,
    /// Icon tint when not selected
    pub icon_color: Option<Color>,
    /// Icon tint when selected
    pub icon_selected_color: Option<Color>,
    pub label: Option<String>,
    pub label_style: Option<Style>,
    pub selected_label_style: Option<Style>,
    /// Maximum number of lines the label may wrap to
    pub max_lines: Option<u16>,
    pub selected: bool,
    pub on_press: Option<PressHandler>,
    pub on_layout: Option<LayoutHandler>,
    /// Draw a divider on the right edge
    pub show_divider: Option<bool>,
    /// Fixed width in columns; flexible when unset
    pub width: Option<u16>,
    /// Content rendered in place of an empty label
    pub children: Option<Text<'static>>,
    pub test_id: Option<String>,
}

impl TabItemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    pub fn icon_selected_color(mut self, color: Color) -> Self {
        self.icon_selected_color = Some(color);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = Some(style);
        self
    }

    pub fn selected_label_style(mut self, style: Style) -> Self {
        self.selected_label_style = Some(style);
        self
    }

    pub fn max_lines(mut self, max_lines: u16) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn on_press(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn on_layout(mut self, handler: impl FnMut(&LayoutEvent) + 'static) -> Self {
        self.on_layout = Some(Box::new(handler));
        self
    }

    pub fn show_divider(mut self, show: bool) -> Self {
        self.show_divider = Some(show);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn children(mut self, children: impl Into<Text<'static>>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    /// Effective line limit (never below 1)
    pub fn effective_max_lines(&self) -> u16 {
        self.max_lines.unwrap_or(1).max(1)
    }

    /// True when the label has visible text (blank lines and spaces alone don't count)
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|label| !label.trim().is_empty())
    }

    /// Fixed width, ignoring a zero width
    pub fn fixed_width(&self) -> Option<u16> {
        self.width.filter(|&width| width > 0)
    }

    pub fn shows_divider(&self) -> bool {
        self.show_divider.unwrap_or(false)
    }
}

impl fmt::Debug for TabItemConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabItemConfig")
            .field("icon", &self.icon)
            .field("icon_color", &self.icon_color)
            .field("icon_selected_color", &self.icon_selected_color)
            .field("label", &self.label)
            .field("label_style", &self.label_style)
            .field("selected_label_style", &self.selected_label_style)
            .field("max_lines", &self.max_lines)
            .field("selected", &self.selected)
            .field("on_press", &self.on_press.is_some())
            .field("on_layout", &self.on_layout.is_some())
            .field("show_divider", &self.show_divider)
            .field("width", &self.width)
            .field("children", &self.children)
            .field("test_id", &self.test_id)
            .finish()
    }
}

/// Style forced onto the label until the first layout
///
/// Until the host has seen one layout the label is drawn with the selected
/// style, so the width reported for an unselected item matches its selected
/// rendering. The first layout settles it for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOverride {
    Initial(Style),
    Settled,
}

impl LabelOverride {
    pub fn style(&self) -> Style {
        match self {
            LabelOverride::Initial(style) => *style,
            LabelOverride::Settled => Style::default(),
        }
    }
}

/// A tab item instance, kept alive across frames by its host
pub struct TabItem {
    props: TabItemConfig,
    theme: Rc<dyn ThemeProvider>,
    label_override: LabelOverride,
    last_layout: Option<Rect>,
}

impl TabItem {
    pub fn new(config: TabItemConfig, theme: Rc<dyn ThemeProvider>) -> Self {
        let props = theme.resolve_props(config);
        let initial = props
            .selected_label_style
            .unwrap_or_else(|| theme.selected_label_style());
        Self {
            props,
            theme,
            label_override: LabelOverride::Initial(initial),
            last_layout: None,
        }
    }

    pub fn props(&self) -> &TabItemConfig {
        &self.props
    }

    pub fn is_selected(&self) -> bool {
        self.props.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.props.selected = selected;
    }

    pub fn label_override(&self) -> LabelOverride {
        self.label_override
    }

    /// Region of the last layout, if the item has been laid out
    pub fn last_layout(&self) -> Option<Rect> {
        self.last_layout
    }

    /// Layout constraint for the host row
    pub fn constraint(&self) -> Constraint {
        match self.props.fixed_width() {
            Some(width) => Constraint::Length(width),
            None => Constraint::Fill(1),
        }
    }

    /// Region the item occupies inside the area a host offers it
    pub fn region(&self, area: Rect) -> Rect {
        match self.props.fixed_width() {
            Some(width) => Rect {
                width: width.min(area.width),
                ..area
            },
            None => area,
        }
    }

    /// Icon tint for the current selection state
    ///
    /// Explicit icon color, then the foreground of the caller's label style,
    /// then the foreground of the theme's label style.
    pub fn icon_tint(&self) -> Option<Color> {
        let (explicit, caller_style, theme_style) = if self.props.selected {
            (
                self.props.icon_selected_color,
                self.props.selected_label_style,
                self.theme.selected_label_style(),
            )
        } else {
            (
                self.props.icon_color,
                self.props.label_style,
                self.theme.label_style(),
            )
        };

        explicit
            .or_else(|| color_from_style(caller_style.as_ref()))
            .or_else(|| color_from_style(Some(&theme_style)))
    }

    /// Label style composed in increasing priority
    pub fn label_style(&self) -> Style {
        let mut style = self.theme.label_style();
        if let Some(caller) = self.props.label_style {
            style = style.patch(caller);
        }
        if self.props.selected {
            style = style.patch(self.theme.selected_label_style());
            if let Some(caller) = self.props.selected_label_style {
                style = style.patch(caller);
            }
        }
        style.patch(self.label_override.style())
    }

    /// Width the content wants without wrapping, padding included
    pub fn natural_width(&self) -> u16 {
        let spacing = self.theme.spacing();
        let icon_width = self.props.icon.as_ref().map_or(0, Icon::width);
        let gap = self.icon_gap();
        let body_width = match (&self.props.label, &self.props.children) {
            (Some(label), _) if self.props.has_label() => {
                label.lines().map(display_width).max().unwrap_or(0)
            }
            (_, Some(children)) => u16::try_from(children.width()).unwrap_or(u16::MAX),
            _ => 0,
        };

        spacing
            .horizontal
            .saturating_mul(2)
            .saturating_add(icon_width)
            .saturating_add(gap)
            .saturating_add(body_width)
    }

    /// Build the layout event for a region
    pub fn layout_event(&self, region: Rect) -> LayoutEvent {
        LayoutEvent::new(
            self.props.test_id.clone(),
            region,
            self.natural_width(),
            self.label_style(),
        )
    }

    /// Layout-complete notification
    ///
    /// Forwards the event to `on_layout` unchanged, drops the initial label
    /// override, and hands the event back to the caller.
    pub fn handle_layout(&mut self, event: LayoutEvent) -> LayoutEvent {
        debug!(
            id = ?self.props.test_id,
            x = event.area.x,
            width = event.area.width,
            content_width = event.content_width,
            "tab_item.layout"
        );
        self.last_layout = Some(event.rect());

        if let Some(on_layout) = self.props.on_layout.as_mut() {
            on_layout(&event);
        }

        if let LabelOverride::Initial(_) = self.label_override {
            debug!(id = ?self.props.test_id, "tab_item.override_settled");
            self.label_override = LabelOverride::Settled;
        }

        event
    }

    /// Paint into `area` and dispatch a layout event if the region changed
    ///
    /// The event is built after painting and before the override settles, so
    /// the frame that produced it and the event agree on the label style.
    pub fn render_in(&mut self, area: Rect, buf: &mut Buffer) -> Option<LayoutEvent> {
        let region = self.region(area);
        (&*self).render(region, buf);

        if self.last_layout == Some(region) {
            return None;
        }
        let event = self.layout_event(region);
        Some(self.handle_layout(event))
    }

    pub fn render_frame(&mut self, frame: &mut Frame, area: Rect) -> Option<LayoutEvent> {
        self.render_in(area, frame.buffer_mut())
    }

    /// Invoke `on_press`; returns whether a handler ran
    pub fn press(&mut self) -> bool {
        debug!(id = ?self.props.test_id, "tab_item.press");
        match self.props.on_press.as_mut() {
            Some(on_press) => {
                on_press();
                true
            }
            None => false,
        }
    }

    /// Check if a cell falls inside the last laid-out region
    pub fn hit_test(&self, column: u16, row: u16) -> bool {
        self.last_layout
            .is_some_and(|rect| rect.contains(ratatui::layout::Position { x: column, y: row }))
    }

    /// Press on a left-button down inside the item
    pub fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        if !self.hit_test(event.column, event.row) {
            return false;
        }
        self.press();
        true
    }

    fn icon_gap(&self) -> u16 {
        if self.props.icon.is_some() && self.props.has_label() {
            self.theme.spacing().icon_gap
        } else {
            0
        }
    }

    fn render_divider(&self, area: Rect, buf: &mut Buffer) {
        let margin = self.theme.spacing().divider_margin;
        // Keep at least one divider row on short items
        let margin = if area.height > margin.saturating_mul(2) { margin } else { 0 };
        let x = area.right() - 1;
        let style = self.theme.divider_style();
        for y in (area.top() + margin)..(area.bottom() - margin) {
            buf.set_string(x, y, symbols::line::VERTICAL, style);
        }
    }

    fn body_lines(&self, max_width: u16, max_height: u16) -> Vec<Line<'static>> {
        if self.props.has_label() {
            let label = self.props.label.as_deref().unwrap_or_default().trim();
            let style = self.label_style();
            // The last line that fits vertically carries the ellipsis
            let max_lines = self.props.effective_max_lines().min(max_height.max(1));
            return wrap_and_truncate(label, max_width, max_lines)
                .into_iter()
                .take(usize::from(max_height))
                .map(|line| Line::styled(line, style))
                .collect();
        }

        self.props
            .children
            .as_ref()
            .map(|children| {
                children
                    .lines
                    .iter()
                    .take(usize::from(max_height))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Widget for &TabItem {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let mut content = area;
        if self.props.shows_divider() {
            self.render_divider(area, buf);
            content.width -= 1;
        }

        let padding = self.theme.spacing().horizontal.min(content.width / 2);
        let inner = Rect {
            x: content.x + padding,
            width: content.width - padding * 2,
            ..content
        };
        if inner.is_empty() {
            return;
        }

        let icon = self.props.icon.as_ref();
        let icon_width = icon.map_or(0, |icon| icon.width().min(inner.width));
        let gap = self.icon_gap().min(inner.width - icon_width);
        let body_max_width = inner.width - icon_width - gap;

        let lines = self.body_lines(body_max_width, inner.height);
        let body_width = lines
            .iter()
            .map(|line| u16::try_from(line.width()).unwrap_or(u16::MAX))
            .max()
            .unwrap_or(0)
            .min(body_max_width);
        let body_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        let block_width = icon_width + gap + body_width;
        let block_height = body_height.max(u16::from(icon.is_some()));
        let block = centered_rect(block_width, block_height, inner);

        if let Some(icon) = icon {
            let style = match self.icon_tint() {
                Some(tint) => Style::default().fg(tint),
                None => Style::default(),
            };
            let icon_y = block.y + block.height.saturating_sub(1) / 2;
            buf.set_stringn(block.x, icon_y, icon.symbol(), usize::from(icon_width), style);
        }

        if !lines.is_empty() && body_width > 0 {
            let body = Rect {
                x: block.x + icon_width + gap,
                y: block.y,
                width: body_width,
                height: body_height.min(block.height),
            };
            Paragraph::new(Text::from(lines))
                .alignment(Alignment::Center)
                .render(body, buf);
        }
    }
}

impl fmt::Debug for TabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabItem")
            .field("props", &self.props)
            .field("label_override", &self.label_override)
            .field("last_layout", &self.last_layout)
            .finish_non_exhaustive()
    }
}
