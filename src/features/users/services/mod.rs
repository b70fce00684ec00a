mod address_service;
mod user_service;

pub use address_service::AddressService;
pub use user_service::{normalize_email, UserService};
