mod contact_form_dto;

pub use contact_form_dto::*;
