// Application State
// Tab strip state: the tab items, their laid-out regions and the selection

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::MouseEvent;
use tab_components::{LayoutEvent, RectRegistry, TabItem, Theme, ThemeError, ThemeProvider};

use super::AppEvent;
use crate::config::{AppConfig, BindingConfigYaml};

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Window title
    pub title: String,

    /// Key bindings shown in the footer
    pub bindings: Vec<BindingConfigYaml>,

    /// Rows given to the tab row, indicator line included
    pub tab_bar_height: u16,

    /// Regions of laid-out tabs, keyed by tab id
    pub registry: RectRegistry,

    /// Whether the application should quit
    pub should_quit: bool,

    items: Vec<TabItem>,
    ids: Vec<String>,
    selected: usize,

    /// Indices pressed since the last drain, written by `on_press`
    pressed: Rc<RefCell<Vec<usize>>>,

    /// Last layout per tab, written by `on_layout`
    layouts: Rc<RefCell<Vec<Option<LayoutEvent>>>>,
}

impl App {
    /// Build the tab items from configuration
    pub fn from_config(config: &AppConfig, theme: Theme) -> Result<Self, ThemeError> {
        let theme: Rc<dyn ThemeProvider> = Rc::new(theme);
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let layouts = Rc::new(RefCell::new(vec![None; config.tabs.len()]));

        let mut items = Vec::with_capacity(config.tabs.len());
        let mut ids = Vec::with_capacity(config.tabs.len());
        for (index, tab) in config.tabs.iter().enumerate() {
            let on_press = Rc::clone(&pressed);
            let on_layout = Rc::clone(&layouts);
            let props = tab
                .to_tab_item_config()?
                .on_press(move || on_press.borrow_mut().push(index))
                .on_layout(move |event| {
                    if let Some(slot) = on_layout.borrow_mut().get_mut(index) {
                        *slot = Some(event.clone());
                    }
                });
            items.push(TabItem::new(props, Rc::clone(&theme)));
            ids.push(tab.id.clone());
        }

        let selected = config.tabs.iter().position(|tab| tab.selected).unwrap_or(0);
        let mut app = Self {
            title: config.application.title.clone(),
            bindings: config.application.bindings.clone(),
            tab_bar_height: config.application.tab_bar_height,
            registry: RectRegistry::new(),
            should_quit: false,
            items,
            ids,
            selected,
            pressed,
            layouts,
        };
        app.apply_selection();
        Ok(app)
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [TabItem] {
        &mut self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.ids.get(self.selected).map(String::as_str)
    }

    /// Last layout reported by a tab's `on_layout`
    pub fn layout_of(&self, index: usize) -> Option<LayoutEvent> {
        self.layouts.borrow().get(index).cloned().flatten()
    }

    /// Select a tab by index; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if index != self.selected {
            tracing::info!(index, id = ?self.ids.get(index), "tab selected");
        }
        self.selected = index;
        self.apply_selection();
        true
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.select((self.selected + 1) % self.items.len());
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        self.select((self.selected + len - 1) % len);
    }

    /// Store a laid-out region in the registry under the tab's id
    pub fn record_layout(&mut self, event: &LayoutEvent) {
        if let Some(id) = event.id.as_deref() {
            self.registry.register(Some(id), event.rect());
        }
    }

    /// Index of the tab registered at a cell
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        self.registry
            .handle_at(column, row)
            .and_then(|handle| self.registry.get_name(handle))
            .and_then(|name| self.ids.iter().position(|id| id == name))
    }

    /// Hand a mouse event to the tab under the pointer, then act on any press
    pub fn handle_click(&mut self, event: &MouseEvent) -> bool {
        let Some(index) = self.tab_at(event.column, event.row) else {
            return false;
        };
        let pressed = self.items[index].handle_mouse(event);
        self.drain_presses();
        pressed
    }

    /// Select the most recently pressed tab, if any
    pub fn drain_presses(&mut self) {
        let last = self.pressed.borrow_mut().drain(..).last();
        if let Some(index) = last {
            self.select(index);
        }
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::SelectPrevious => self.select_previous(),
            AppEvent::SelectNext => self.select_next(),
            AppEvent::Select(index) => {
                self.select(index);
            }
            AppEvent::Click(mouse) => {
                self.handle_click(&mouse);
            }
            AppEvent::None => {}
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn apply_selection(&mut self) {
        let selected = self.selected;
        for (index, item) in self.items.iter_mut().enumerate() {
            item.set_selected(index == selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    const CONFIG: &str = r#"
application:
  title: "Demo"
tabs:
  - id: a
    label: Alpha
  - id: b
    label: Beta
    selected: true
  - id: c
    label: Gamma
"#;

    fn app() -> App {
        let config: AppConfig = serde_yaml::from_str(CONFIG).unwrap();
        App::from_config(&config, Theme::default()).unwrap()
    }

    fn selection(app: &App) -> Vec<bool> {
        app.items().iter().map(TabItem::is_selected).collect()
    }

    #[test]
    fn test_initial_selection_from_config() {
        let app = app();
        assert_eq!(app.selected(), 1);
        assert_eq!(app.selected_id(), Some("b"));
        assert_eq!(selection(&app), vec![false, true, false]);
    }

    #[test]
    fn test_selection_defaults_to_first() {
        let config: AppConfig =
            serde_yaml::from_str("application:\n  title: t\ntabs:\n  - id: x\n  - id: y\n").unwrap();
        let app = App::from_config(&config, Theme::default()).unwrap();
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_select_wraps() {
        let mut app = app();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected(), 0);
        app.select_previous();
        assert_eq!(app.selected(), 2);
        assert_eq!(selection(&app), vec![false, false, true]);
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut app = app();
        assert!(!app.select(7));
        assert_eq!(app.selected(), 1);
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Lay tabs out at 10-column slots, skipping index 1
    fn lay_out(app: &mut App) {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 2));
        for index in [0usize, 2] {
            let x = u16::try_from(index).unwrap() * 10;
            let event = app.items_mut()[index]
                .render_in(Rect::new(x, 0, 10, 2), &mut buf)
                .unwrap();
            app.record_layout(&event);
        }
    }

    #[test]
    fn test_click_presses_tab_under_pointer() {
        let mut app = app();
        lay_out(&mut app);
        assert_eq!(app.tab_at(25, 1), Some(2));

        app.handle_event(AppEvent::Click(mouse(MouseEventKind::Down(MouseButton::Left), 25, 1)));
        assert_eq!(app.selected_id(), Some("c"));
        assert_eq!(selection(&app), vec![false, false, true]);
    }

    #[test]
    fn test_click_outside_tabs_ignored() {
        let mut app = app();
        lay_out(&mut app);

        // Tab "b" was never laid out, so nothing is registered there
        assert!(!app.handle_click(&mouse(MouseEventKind::Down(MouseButton::Left), 15, 1)));
        assert!(!app.handle_click(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 2)));
        assert_eq!(app.selected_id(), Some("b"));
    }

    #[test]
    fn test_click_needs_left_button_down() {
        let mut app = app();
        lay_out(&mut app);

        assert!(!app.handle_click(&mouse(MouseEventKind::Down(MouseButton::Right), 5, 0)));
        assert!(!app.handle_click(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 0)));
        assert_eq!(app.selected_id(), Some("b"));

        assert!(app.handle_click(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 0)));
        assert_eq!(app.selected_id(), Some("a"));
    }

    #[test]
    fn test_press_goes_through_callback() {
        let mut app = app();
        assert!(app.items_mut()[2].press());
        // Selection changes only once presses are drained
        assert_eq!(app.selected(), 1);
        app.drain_presses();
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_layout_callback_recorded() {
        let mut app = app();
        assert!(app.layout_of(0).is_none());

        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        let event = app.items_mut()[0].render_in(area, &mut buf);
        let recorded = app.layout_of(0).unwrap();
        assert_eq!(Some(recorded.clone()), event);
        assert_eq!(recorded.id.as_deref(), Some("a"));
        assert_eq!(recorded.area.width, 12);
    }

    #[test]
    fn test_quit_event() {
        let mut app = app();
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }
}
