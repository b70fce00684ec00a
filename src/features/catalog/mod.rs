//! Rental catalog taxonomy: categories, sub-categories, featured
//! categories, brands and price ranges.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | Public | List categories |
//! | POST | `/api/categories` | Editor | Create category |
//! | GET | `/api/categories/{id}` | Public | Get category |
//! | PUT/DELETE | `/api/categories/{id}` | Editor | Update / delete category |
//! | GET | `/api/categories/{id}/sub-categories` | Public | List sub-categories |
//! | POST | `/api/categories/{id}/sub-categories` | Editor | Create sub-category |
//! | GET | `/api/sub-categories/{id}` | Public | Get sub-category |
//! | PUT/DELETE | `/api/sub-categories/{id}` | Editor | Update / delete sub-category |
//! | GET | `/api/featured-categories[/{id}]` | Public | Featured categories |
//! | POST/PUT/DELETE | `/api/featured-categories[/{id}]` | Editor | Manage featured categories |
//! | GET | `/api/brands[/{id}]` | Public | Brands |
//! | POST/PUT/DELETE | `/api/brands[/{id}]` | Editor | Manage brands |
//! | GET | `/api/prices[/{id}]` | Public | Price ranges |
//! | POST/PUT/DELETE | `/api/prices[/{id}]` | Editor | Manage price ranges |
//!
//! Deleting a category cascades to its sub-categories and featured entries.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use routes::CatalogServices;
pub use services::{
    BrandService, CategoryService, FeaturedCategoryService, PriceService, SubCategoryService,
};
