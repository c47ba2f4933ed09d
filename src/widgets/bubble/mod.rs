// bubble-tabbar/src/widgets/bubble/mod.rs
mod bubble_widget;
pub use bubble_widget::*;
