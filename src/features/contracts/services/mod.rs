pub(crate) mod contract_service;
mod user_contract_service;

pub use contract_service::ContractService;
pub use user_contract_service::UserContractService;
