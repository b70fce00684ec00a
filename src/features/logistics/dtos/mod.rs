mod channel_dto;
mod warehouse_connection_dto;
mod warehouse_dto;

pub use channel_dto::*;
pub use warehouse_connection_dto::*;
pub use warehouse_dto::*;
