mod address_repository;
mod user_repository;

pub use address_repository::{AddressRepository, PgAddressRepository};
pub use user_repository::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use address_repository::MockAddressRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
