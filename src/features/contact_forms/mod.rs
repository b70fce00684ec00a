//! Messages sent from the storefront contact page.
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/contact-forms` | Public | Submit a message |
//! | GET | `/api/contact-forms` | Editor | List messages, unread first |
//! | GET/DELETE | `/api/contact-forms/{id}` | Editor | Read / delete a message |
//! | PUT | `/api/contact-forms/{id}/read` | Editor | Mark read or unread |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ContactFormService;
