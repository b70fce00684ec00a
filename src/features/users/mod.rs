//! Accounts and their addresses.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET/POST | `/api/users` | Admin | List / create users |
//! | GET/PUT/DELETE | `/api/users/{id}` | Admin | Single user |
//! | GET/POST | `/api/users/{id}/addresses` | Admin | A user's addresses |
//! | GET/PUT/DELETE | `/api/addresses/{id}` | Admin | Single address |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::{AddressService, UserService};
