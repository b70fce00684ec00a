//! Fulfilment setup: warehouses, sales channels and which warehouse
//! serves which channel.
//!
//! ## Endpoints (admin only)
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET/POST | `/api/warehouses` | List / create warehouses |
//! | GET/PUT/DELETE | `/api/warehouses/{id}` | Single warehouse |
//! | GET/POST | `/api/channels` | List / create channels |
//! | GET/PUT/DELETE | `/api/channels/{id}` | Single channel |
//! | GET/POST | `/api/warehouses/{id}/connections` | A warehouse's channels |
//! | GET/PUT/DELETE | `/api/warehouse-connections/{id}` | Single connection |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use routes::LogisticsServices;
pub use services::{ChannelService, WarehouseConnectionService, WarehouseService};
