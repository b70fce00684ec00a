mod contact_form_repository;

pub use contact_form_repository::{ContactFormRepository, PgContactFormRepository};

#[cfg(test)]
pub use contact_form_repository::MockContactFormRepository;
