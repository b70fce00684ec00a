//! Contracts users must accept, and the record of who accepted what.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/contracts[/{id}]` | Authenticated | Read contracts |
//! | POST/PUT/DELETE | `/api/contracts[/{id}]` | Admin | Manage contracts |
//! | GET/POST | `/api/users/{id}/contracts` | Admin | A user's acceptances |
//! | GET/PUT/DELETE | `/api/user-contracts/{id}` | Admin | Single acceptance |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::{ContractService, UserContractService};
