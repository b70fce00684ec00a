mod contract_handler;
mod user_contract_handler;

pub use contract_handler::*;
pub use user_contract_handler::*;
