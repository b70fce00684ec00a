mod contract_dto;
mod user_contract_dto;

pub use contract_dto::*;
pub use user_contract_dto::*;
