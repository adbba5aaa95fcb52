// Core infrastructure module
// Application state and event handling for the tab strip

pub mod app;
pub mod events;

pub use app::App;
pub use events::{AppEvent, EventHandler};
