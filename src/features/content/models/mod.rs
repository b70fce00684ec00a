mod blog;
mod faq;
mod feature;
mod footer_item;
mod menu_item;
mod slider;

pub use blog::Blog;
pub use faq::Faq;
pub use feature::Feature;
pub use footer_item::FooterItem;
pub use menu_item::MenuItem;
pub use slider::Slider;
