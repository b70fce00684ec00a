mod contract_repository;
mod user_contract_repository;

pub use contract_repository::{ContractRepository, PgContractRepository};
pub use user_contract_repository::{PgUserContractRepository, UserContractRepository};

#[cfg(test)]
pub use contract_repository::MockContractRepository;
#[cfg(test)]
pub use user_contract_repository::MockUserContractRepository;
