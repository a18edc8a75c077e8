pub mod ui_handler;

pub use ui_handler::*;
