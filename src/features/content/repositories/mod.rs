mod blog_repository;
mod faq_repository;
mod feature_repository;
mod footer_item_repository;
mod menu_item_repository;
mod slider_repository;

pub use blog_repository::{BlogRepository, PgBlogRepository};
pub use faq_repository::{FaqRepository, PgFaqRepository};
pub use feature_repository::{FeatureRepository, PgFeatureRepository};
pub use footer_item_repository::{FooterItemRepository, PgFooterItemRepository};
pub use menu_item_repository::{MenuItemRepository, PgMenuItemRepository};
pub use slider_repository::{PgSliderRepository, SliderRepository};

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use faq_repository::MockFaqRepository;
#[cfg(test)]
pub use feature_repository::MockFeatureRepository;
#[cfg(test)]
pub use footer_item_repository::MockFooterItemRepository;
#[cfg(test)]
pub use menu_item_repository::MockMenuItemRepository;
#[cfg(test)]
pub use slider_repository::MockSliderRepository;
