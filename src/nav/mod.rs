// bubble-tabbar/src/nav/mod.rs
mod nav_controller;
pub use nav_controller::*;

mod nav_host;
pub use nav_host::*;
