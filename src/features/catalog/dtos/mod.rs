mod brand_dto;
mod category_dto;
mod featured_category_dto;
mod price_dto;
mod sub_category_dto;

pub use brand_dto::*;
pub use category_dto::*;
pub use featured_category_dto::*;
pub use price_dto::*;
pub use sub_category_dto::*;
