// UI module
// TUI views and the event loop for the tab strip

pub mod app_view;
pub mod styles;
pub mod tab_row;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use styles::Styles;
pub use tab_row::render_tab_row;

/// Run the main application event loop
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick_rate: Duration) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(tick_rate)? {
            let event = event::read()?;
            let app_event = EventHandler::handle(event);
            app.handle_event(app_event);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}
