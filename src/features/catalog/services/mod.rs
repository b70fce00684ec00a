mod brand_service;
pub(crate) mod category_service;
mod featured_category_service;
mod price_service;
mod sub_category_service;

pub use brand_service::BrandService;
pub use category_service::CategoryService;
pub use featured_category_service::FeaturedCategoryService;
pub use price_service::PriceService;
pub use sub_category_service::SubCategoryService;
