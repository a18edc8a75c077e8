pub mod airport_handler;

pub use airport_handler::*;
