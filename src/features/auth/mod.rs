//! Password login, HS256 access tokens with sliding expiration, and role guards.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/login` | No | Exchange credentials for a token |
//! | POST | `/api/auth/refresh` | Yes | Fresh token for the current user |
//! | GET | `/api/auth/me` | Yes | Current user profile |
//! | PUT | `/api/auth/password` | Yes | Change own password |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod services;

pub use services::{AuthService, PasswordService, TokenService};
