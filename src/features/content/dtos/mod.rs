mod blog_dto;
mod faq_dto;
mod feature_dto;
mod footer_item_dto;
mod menu_item_dto;
mod slider_dto;

pub use blog_dto::*;
pub use faq_dto::*;
pub use feature_dto::*;
pub use footer_item_dto::*;
pub use menu_item_dto::*;
pub use slider_dto::*;
