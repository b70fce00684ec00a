mod address_dto;
mod user_dto;

pub use address_dto::*;
pub use user_dto::*;
