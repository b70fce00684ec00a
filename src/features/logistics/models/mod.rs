mod channel;
mod warehouse;
mod warehouse_connection;

pub use channel::Channel;
pub use warehouse::Warehouse;
pub use warehouse_connection::WarehouseConnection;
