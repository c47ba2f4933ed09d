// bubble-tabbar/src/lib.rs
mod error;
pub use error::{BubbleTabBarError, Result};

mod widgets;
pub use widgets::*;

mod nav;
pub use nav::*;

mod tui;
pub use tui::*;

pub mod tui_theme;

pub use ratatui;
