mod brand;
mod category;
mod featured_category;
mod price;
mod sub_category;

pub use brand::Brand;
pub use category::Category;
pub use featured_category::FeaturedCategory;
pub use price::Price;
pub use sub_category::SubCategory;
