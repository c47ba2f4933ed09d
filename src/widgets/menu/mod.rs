// bubble-tabbar/src/widgets/menu/mod.rs
mod font_style;
pub use font_style::*;

mod menu_item;
pub use menu_item::*;

mod menu_parser;
pub use menu_parser::*;
