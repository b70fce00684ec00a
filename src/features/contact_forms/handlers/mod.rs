mod contact_form_handler;

pub use contact_form_handler::*;
