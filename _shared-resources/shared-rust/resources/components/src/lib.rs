// Shared tab components library
// Tab item widget, theming and rectangle tracking for ratatui tab bars

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
pub use self::core::*;
pub use elements::*;
pub use utilities::*;
