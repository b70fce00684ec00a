mod contract;
mod user_contract;

pub use contract::Contract;
pub use user_contract::UserContract;
