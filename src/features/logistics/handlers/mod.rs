mod channel_handler;
mod warehouse_connection_handler;
mod warehouse_handler;

pub use channel_handler::*;
pub use warehouse_connection_handler::*;
pub use warehouse_handler::*;
