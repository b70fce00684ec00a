mod blog_service;
mod faq_service;
mod feature_service;
mod footer_item_service;
mod menu_item_service;
mod slider_service;

pub use blog_service::BlogService;
pub use faq_service::FaqService;
pub use feature_service::FeatureService;
pub use footer_item_service::FooterItemService;
pub use menu_item_service::MenuItemService;
pub use slider_service::SliderService;
