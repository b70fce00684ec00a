//! Storefront site content: home sliders, blog posts, FAQs, feature
//! highlights, footer links and the main menu.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/sliders[/{id}]` | Public | Home page sliders |
//! | GET | `/api/blogs[/{id}]` | Public | Blog posts, newest published first |
//! | GET | `/api/faqs[/{id}]` | Public | FAQs |
//! | GET | `/api/features[/{id}]` | Public | Feature highlights |
//! | GET | `/api/footer-items[/{id}]` | Public | Footer links |
//! | GET | `/api/menu-items[/{id}]` | Public | Main menu |
//! | POST | `/api/{resource}` | Editor | Create |
//! | PUT/DELETE | `/api/{resource}/{id}` | Editor | Update / delete |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use routes::ContentServices;
pub use services::{
    BlogService, FaqService, FeatureService, FooterItemService, MenuItemService, SliderService,
};
