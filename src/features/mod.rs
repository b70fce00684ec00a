pub mod auth;
pub mod catalog;
pub mod contact_forms;
pub mod content;
pub mod contracts;
pub mod logistics;
pub mod users;
