// bubble-tabbar/src/widgets/mod.rs
mod menu;
pub use menu::*;

mod bubble;
pub use bubble::*;

mod bubble_tabbar;
pub use bubble_tabbar::*;
