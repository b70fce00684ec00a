mod brand_repository;
mod category_repository;
mod featured_category_repository;
mod price_repository;
mod sub_category_repository;

pub use brand_repository::{BrandRepository, PgBrandRepository};
pub use category_repository::{CategoryRepository, PgCategoryRepository};
pub use featured_category_repository::{FeaturedCategoryRepository, PgFeaturedCategoryRepository};
pub use price_repository::{PgPriceRepository, PriceRepository};
pub use sub_category_repository::{PgSubCategoryRepository, SubCategoryRepository};

#[cfg(test)]
pub use brand_repository::MockBrandRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use featured_category_repository::MockFeaturedCategoryRepository;
#[cfg(test)]
pub use price_repository::MockPriceRepository;
#[cfg(test)]
pub use sub_category_repository::MockSubCategoryRepository;
