mod blog_handler;
mod faq_handler;
mod feature_handler;
mod footer_item_handler;
mod menu_item_handler;
mod slider_handler;

pub use blog_handler::*;
pub use faq_handler::*;
pub use feature_handler::*;
pub use footer_item_handler::*;
pub use menu_item_handler::*;
pub use slider_handler::*;
