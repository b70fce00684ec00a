mod address_handler;
mod user_handler;

pub use address_handler::*;
pub use user_handler::*;
