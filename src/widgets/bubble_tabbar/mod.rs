// bubble-tabbar/src/widgets/bubble_tabbar/mod.rs
mod selection;
pub use selection::*;

mod tabbar_config;
pub use tabbar_config::*;

mod tabbar_widget;
pub use tabbar_widget::*;
