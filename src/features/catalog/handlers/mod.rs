mod brand_handler;
mod category_handler;
mod featured_category_handler;
mod price_handler;
mod sub_category_handler;

pub use brand_handler::*;
pub use category_handler::*;
pub use featured_category_handler::*;
pub use price_handler::*;
pub use sub_category_handler::*;
