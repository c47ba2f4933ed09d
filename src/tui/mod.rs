// bubble-tabbar/src/tui/mod.rs
mod tui_app;
pub use tui_app::*;

mod input_backend;
pub use input_backend::*;
