use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::content::handlers;
use crate::features::content::services::{
    BlogService, FaqService, FeatureService, FooterItemService, MenuItemService, SliderService,
};

/// Services backing the site content routes
#[derive(Clone)]
pub struct ContentServices {
    pub sliders: Arc<SliderService>,
    pub blogs: Arc<BlogService>,
    pub faqs: Arc<FaqService>,
    pub features: Arc<FeatureService>,
    pub footer_items: Arc<FooterItemService>,
    pub menu_items: Arc<MenuItemService>,
}

/// Storefront reads, no authentication required
pub fn public_routes(services: &ContentServices) -> Router {
    Router::new()
        .merge(
            Router::new()
                .route("/api/sliders", get(handlers::list_sliders))
                .route("/api/sliders/{id}", get(handlers::get_slider))
                .with_state(services.sliders.clone()),
        )
        .merge(
            Router::new()
                .route("/api/blogs", get(handlers::list_blogs))
                .route("/api/blogs/{id}", get(handlers::get_blog))
                .with_state(services.blogs.clone()),
        )
        .merge(
            Router::new()
                .route("/api/faqs", get(handlers::list_faqs))
                .route("/api/faqs/{id}", get(handlers::get_faq))
                .with_state(services.faqs.clone()),
        )
        .merge(
            Router::new()
                .route("/api/features", get(handlers::list_features))
                .route("/api/features/{id}", get(handlers::get_feature))
                .with_state(services.features.clone()),
        )
        .merge(
            Router::new()
                .route("/api/footer-items", get(handlers::list_footer_items))
                .route("/api/footer-items/{id}", get(handlers::get_footer_item))
                .with_state(services.footer_items.clone()),
        )
        .merge(
            Router::new()
                .route("/api/menu-items", get(handlers::list_menu_items))
                .route("/api/menu-items/{id}", get(handlers::get_menu_item))
                .with_state(services.menu_items.clone()),
        )
}

/// Content management (editor or admin, behind auth middleware)
pub fn protected_routes(services: &ContentServices) -> Router {
    Router::new()
        .merge(
            Router::new()
                .route("/api/sliders", post(handlers::create_slider))
                .route(
                    "/api/sliders/{id}",
                    put(handlers::update_slider).delete(handlers::delete_slider),
                )
                .with_state(services.sliders.clone()),
        )
        .merge(
            Router::new()
                .route("/api/blogs", post(handlers::create_blog))
                .route(
                    "/api/blogs/{id}",
                    put(handlers::update_blog).delete(handlers::delete_blog),
                )
                .with_state(services.blogs.clone()),
        )
        .merge(
            Router::new()
                .route("/api/faqs", post(handlers::create_faq))
                .route(
                    "/api/faqs/{id}",
                    put(handlers::update_faq).delete(handlers::delete_faq),
                )
                .with_state(services.faqs.clone()),
        )
        .merge(
            Router::new()
                .route("/api/features", post(handlers::create_feature))
                .route(
                    "/api/features/{id}",
                    put(handlers::update_feature).delete(handlers::delete_feature),
                )
                .with_state(services.features.clone()),
        )
        .merge(
            Router::new()
                .route("/api/footer-items", post(handlers::create_footer_item))
                .route(
                    "/api/footer-items/{id}",
                    put(handlers::update_footer_item).delete(handlers::delete_footer_item),
                )
                .with_state(services.footer_items.clone()),
        )
        .merge(
            Router::new()
                .route("/api/menu-items", post(handlers::create_menu_item))
                .route(
                    "/api/menu-items/{id}",
                    put(handlers::update_menu_item).delete(handlers::delete_menu_item),
                )
                .with_state(services.menu_items.clone()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::models::Faq;
    use crate::features::content::repositories::{
        MockBlogRepository, MockFaqRepository, MockFeatureRepository, MockFooterItemRepository,
        MockMenuItemRepository, MockSliderRepository,
    };
    use crate::shared::audit::AuditTrail;
    use crate::shared::test_helpers::{create_customer_user, create_editor_user, with_user};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn app(faqs: MockFaqRepository) -> Router {
        let services = ContentServices {
            sliders: Arc::new(SliderService::new(Arc::new(MockSliderRepository::new()))),
            blogs: Arc::new(BlogService::new(Arc::new(MockBlogRepository::new()))),
            faqs: Arc::new(FaqService::new(Arc::new(faqs))),
            features: Arc::new(FeatureService::new(Arc::new(MockFeatureRepository::new()))),
            footer_items: Arc::new(FooterItemService::new(Arc::new(
                MockFooterItemRepository::new(),
            ))),
            menu_items: Arc::new(MenuItemService::new(Arc::new(MockMenuItemRepository::new()))),
        };
        public_routes(&services).merge(protected_routes(&services))
    }

    fn sample_faq() -> Faq {
        Faq {
            id: Uuid::now_v7(),
            question: "How long can I rent?".to_string(),
            answer: "Up to 30 days.".to_string(),
            order_number: 1,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    #[tokio::test]
    async fn test_get_faq_is_public() {
        let faq = sample_faq();
        let id = faq.id;
        let mut repo = MockFaqRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(faq.clone())));

        let server = TestServer::new(app(repo)).unwrap();
        let response = server.get(&format!("/api/faqs/{}", id)).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["id"], id.to_string());
        assert_eq!(body["data"]["question"], "How long can I rent?");
    }

    #[tokio::test]
    async fn test_customer_cannot_delete_faq() {
        let mut repo = MockFaqRepository::new();
        repo.expect_delete().never();

        let server =
            TestServer::new(with_user(app(repo), create_customer_user())).unwrap();
        let response = server.delete(&format!("/api/faqs/{}", Uuid::now_v7())).await;

        response.assert_status_forbidden();
    }

    #[tokio::test]
    async fn test_delete_returns_null_data() {
        let mut repo = MockFaqRepository::new();
        repo.expect_delete().returning(|_| Ok(true));

        let server = TestServer::new(with_user(app(repo), create_editor_user())).unwrap();
        let response = server.delete(&format!("/api/faqs/{}", Uuid::now_v7())).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
        assert_eq!(body["message"], "FAQ deleted");
    }

    #[tokio::test]
    async fn test_duplicate_order_is_409() {
        let mut repo = MockFaqRepository::new();
        repo.expect_order_number_taken().returning(|_, _| Ok(true));

        let server = TestServer::new(with_user(app(repo), create_editor_user())).unwrap();
        let response = server
            .post("/api/faqs")
            .json(&json!({
                "question": "Is there a deposit?",
                "answer": "Yes.",
                "order_number": 1
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CONFLICT);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
