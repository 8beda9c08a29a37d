//! UI module for the keepsake TUI.

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
