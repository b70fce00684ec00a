mod channel_repository;
mod warehouse_connection_repository;
mod warehouse_repository;

pub use channel_repository::{ChannelRepository, PgChannelRepository};
pub use warehouse_connection_repository::{
    PgWarehouseConnectionRepository, WarehouseConnectionRepository,
};
pub use warehouse_repository::{PgWarehouseRepository, WarehouseRepository};

#[cfg(test)]
pub use channel_repository::MockChannelRepository;
#[cfg(test)]
pub use warehouse_connection_repository::MockWarehouseConnectionRepository;
#[cfg(test)]
pub use warehouse_repository::MockWarehouseRepository;
