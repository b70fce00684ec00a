use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::catalog::handlers;
use crate::features::catalog::services::{
    BrandService, CategoryService, FeaturedCategoryService, PriceService, SubCategoryService,
};

/// Services backing the catalog routes
#[derive(Clone)]
pub struct CatalogServices {
    pub categories: Arc<CategoryService>,
    pub sub_categories: Arc<SubCategoryService>,
    pub featured_categories: Arc<FeaturedCategoryService>,
    pub brands: Arc<BrandService>,
    pub prices: Arc<PriceService>,
}

/// Storefront reads, no authentication required
pub fn public_routes(services: &CatalogServices) -> Router {
    let categories = Router::new()
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{id}", get(handlers::get_category))
        .with_state(services.categories.clone());

    let sub_categories = Router::new()
        .route(
            "/api/categories/{id}/sub-categories",
            get(handlers::list_sub_categories),
        )
        .route("/api/sub-categories/{id}", get(handlers::get_sub_category))
        .with_state(services.sub_categories.clone());

    let featured = Router::new()
        .route(
            "/api/featured-categories",
            get(handlers::list_featured_categories),
        )
        .route(
            "/api/featured-categories/{id}",
            get(handlers::get_featured_category),
        )
        .with_state(services.featured_categories.clone());

    let brands = Router::new()
        .route("/api/brands", get(handlers::list_brands))
        .route("/api/brands/{id}", get(handlers::get_brand))
        .with_state(services.brands.clone());

    let prices = Router::new()
        .route("/api/prices", get(handlers::list_prices))
        .route("/api/prices/{id}", get(handlers::get_price))
        .with_state(services.prices.clone());

    categories
        .merge(sub_categories)
        .merge(featured)
        .merge(brands)
        .merge(prices)
}

/// Catalog writes (editor or admin, behind auth middleware)
pub fn protected_routes(services: &CatalogServices) -> Router {
    let categories = Router::new()
        .route("/api/categories", post(handlers::create_category))
        .route(
            "/api/categories/{id}",
            put(handlers::update_category).delete(handlers::delete_category),
        )
        .with_state(services.categories.clone());

    let sub_categories = Router::new()
        .route(
            "/api/categories/{id}/sub-categories",
            post(handlers::create_sub_category),
        )
        .route(
            "/api/sub-categories/{id}",
            put(handlers::update_sub_category).delete(handlers::delete_sub_category),
        )
        .with_state(services.sub_categories.clone());

    let featured = Router::new()
        .route(
            "/api/featured-categories",
            post(handlers::create_featured_category),
        )
        .route(
            "/api/featured-categories/{id}",
            put(handlers::update_featured_category).delete(handlers::delete_featured_category),
        )
        .with_state(services.featured_categories.clone());

    let brands = Router::new()
        .route("/api/brands", post(handlers::create_brand))
        .route(
            "/api/brands/{id}",
            put(handlers::update_brand).delete(handlers::delete_brand),
        )
        .with_state(services.brands.clone());

    let prices = Router::new()
        .route("/api/prices", post(handlers::create_price))
        .route(
            "/api/prices/{id}",
            put(handlers::update_price).delete(handlers::delete_price),
        )
        .with_state(services.prices.clone());

    categories
        .merge(sub_categories)
        .merge(featured)
        .merge(brands)
        .merge(prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::models::Category;
    use crate::features::catalog::repositories::{
        MockBrandRepository, MockCategoryRepository, MockFeaturedCategoryRepository,
        MockPriceRepository, MockSubCategoryRepository,
    };
    use crate::shared::audit::AuditTrail;
    use crate::shared::test_helpers::{create_customer_user, create_editor_user, with_user};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn services(categories: MockCategoryRepository) -> CatalogServices {
        let categories: Arc<MockCategoryRepository> = Arc::new(categories);
        CatalogServices {
            categories: Arc::new(CategoryService::new(categories.clone())),
            sub_categories: Arc::new(SubCategoryService::new(
                Arc::new(MockSubCategoryRepository::new()),
                categories.clone(),
            )),
            featured_categories: Arc::new(FeaturedCategoryService::new(
                Arc::new(MockFeaturedCategoryRepository::new()),
                categories,
            )),
            brands: Arc::new(BrandService::new(Arc::new(MockBrandRepository::new()))),
            prices: Arc::new(PriceService::new(Arc::new(MockPriceRepository::new()))),
        }
    }

    fn app(categories: MockCategoryRepository) -> Router {
        let services = services(categories);
        public_routes(&services).merge(protected_routes(&services))
    }

    fn sample_category() -> Category {
        Category {
            id: Uuid::now_v7(),
            name: "Cameras".to_string(),
            slug: "cameras".to_string(),
            description: None,
            image_url: None,
            order_number: 1,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    #[tokio::test]
    async fn test_public_list_needs_no_token() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list()
            .returning(|_| Ok((vec![sample_category()], 1)));

        let server = TestServer::new(app(repo)).unwrap();
        let response = server.get("/api/categories").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0]["slug"], "cameras");
        assert_eq!(body["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_malformed_id_and_page_return_envelope() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_list().never();
        let server = TestServer::new(app(repo)).unwrap();

        let response = server.get("/api/categories/not-a-uuid").await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);

        let response = server.get("/api/categories?page=two").await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_write_without_user_is_401() {
        let server = TestServer::new(app(MockCategoryRepository::new())).unwrap();
        let response = server
            .post("/api/categories")
            .json(&json!({"name": "Audio", "slug": "audio", "order_number": 2}))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_customer_cannot_create_category() {
        let app = with_user(app(MockCategoryRepository::new()), create_customer_user());
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/categories")
            .json(&json!({"name": "Audio", "slug": "audio", "order_number": 2}))
            .await;

        response.assert_status_forbidden();
        let body: Value = response.json();
        assert_eq!(body["message"], "Editor access required");
    }

    #[tokio::test]
    async fn test_editor_creates_category() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_slug_taken().returning(|_, _| Ok(false));
        repo.expect_order_number_taken().returning(|_, _| Ok(false));
        repo.expect_insert().returning(|c| Ok(c.clone()));

        let editor = create_editor_user();
        let editor_id = editor.user_id;
        let server = TestServer::new(with_user(app(repo), editor)).unwrap();

        let response = server
            .post("/api/categories")
            .json(&json!({"name": "Audio", "slug": "audio", "order_number": 2}))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["slug"], "audio");
        assert_eq!(body["data"]["is_active"], true);
        assert_eq!(body["data"]["created_by"], editor_id.to_string());
    }

    #[tokio::test]
    async fn test_bad_slug_is_400() {
        let server = TestServer::new(with_user(
            app(MockCategoryRepository::new()),
            create_editor_user(),
        ))
        .unwrap();

        let response = server
            .post("/api/categories")
            .json(&json!({"name": "Audio", "slug": "Not A Slug", "order_number": 2}))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_sub_categories_of_unknown_category_is_404() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let server = TestServer::new(app(repo)).unwrap();
        let response = server
            .get(&format!("/api/categories/{}/sub-categories", Uuid::now_v7()))
            .await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
