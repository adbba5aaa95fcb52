// GUI Elements module
// Visual components that render UI elements

pub mod tab_item;

pub use tab_item::*;
