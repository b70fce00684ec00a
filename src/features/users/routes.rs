use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::{AddressService, UserService};

/// User and address management routes (admin only, behind auth middleware)
pub fn routes(user_service: Arc<UserService>, address_service: Arc<AddressService>) -> Router {
    let users = Router::new()
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(user_service);

    let addresses = Router::new()
        .route(
            "/api/users/{id}/addresses",
            get(handlers::list_user_addresses).post(handlers::create_address),
        )
        .route(
            "/api/addresses/{id}",
            get(handlers::get_address)
                .put(handlers::update_address)
                .delete(handlers::delete_address),
        )
        .with_state(address_service);

    users.merge(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::services::PasswordService;
    use crate::features::users::models::User;
    use crate::features::users::repositories::{MockAddressRepository, MockUserRepository};
    use crate::shared::audit::AuditTrail;
    use crate::shared::test_helpers::{create_editor_user, with_admin_auth, with_user};
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn router(users: MockUserRepository) -> Router {
        let users = Arc::new(users);
        let user_service = Arc::new(UserService::new(
            users.clone(),
            Arc::new(PasswordService::new(1_000)),
        ));
        let address_service = Arc::new(AddressService::new(
            Arc::new(MockAddressRepository::new()),
            users,
        ));
        routes(user_service, address_service)
    }

    fn sample_user() -> User {
        User {
            id: Uuid::now_v7(),
            email: "linus@example.com".to_string(),
            first_name: "Linus".to_string(),
            last_name: "T".to_string(),
            phone: None,
            password_hash: "$pbkdf2-sha256$i=1000,l=32$c2FsdA$aGFzaA".to_string(),
            role: "editor".to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    #[tokio::test]
    async fn test_editor_cannot_manage_users() {
        let app = with_user(router(MockUserRepository::new()), create_editor_user());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/users").await;
        response.assert_status_forbidden();

        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Admin access required");
    }

    #[tokio::test]
    async fn test_list_users_has_meta_and_no_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|_| Ok((vec![sample_user()], 1)));

        let server = TestServer::new(with_admin_auth(router(repo))).unwrap();
        let response = server.get("/api/users?page=1&page_size=5").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["meta"], json!({"total": 1, "page": 1, "page_size": 5}));
        assert!(body["data"][0].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_unknown_user_is_404_envelope() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let server = TestServer::new(with_admin_auth(router(repo))).unwrap();
        let response = server.get(&format!("/api/users/{}", Uuid::now_v7())).await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_create_user_validation_error() {
        let server =
            TestServer::new(with_admin_auth(router(MockUserRepository::new()))).unwrap();
        let response = server
            .post("/api/users")
            .json(&json!({
                "email": "not-an-email",
                "first_name": "A",
                "last_name": "B",
                "password": "password-123",
                "role": "editor"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_create_user_returns_201() {
        let mut repo = MockUserRepository::new();
        repo.expect_email_taken().returning(|_, _| Ok(false));
        repo.expect_insert().returning(|u| Ok(u.clone()));

        let server = TestServer::new(with_admin_auth(router(repo))).unwrap();
        let response = server
            .post("/api/users")
            .json(&json!({
                "email": "new@example.com",
                "first_name": "New",
                "last_name": "Person",
                "password": "password-123",
                "role": "customer"
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["role"], "customer");
    }
}
