pub(crate) mod channel_service;
mod warehouse_connection_service;
pub(crate) mod warehouse_service;

pub use channel_service::ChannelService;
pub use warehouse_connection_service::WarehouseConnectionService;
pub use warehouse_service::WarehouseService;
