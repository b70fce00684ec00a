use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

/// Protected auth routes (require JWT authentication)
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .route("/api/auth/refresh", post(handlers::refresh_token))
        .route("/api/auth/password", put(handlers::change_password))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::middleware::auth_middleware;
    use crate::features::auth::model::AuthenticatedUser;
    use crate::features::auth::services::{PasswordService, TokenService};
    use crate::features::users::models::User;
    use crate::features::users::repositories::MockUserRepository;
    use crate::shared::audit::AuditTrail;
    use crate::shared::constants::REFRESHED_TOKEN_HEADER;
    use crate::shared::test_helpers::test_auth_config;
    use axum::middleware::from_fn_with_state;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use uuid::Uuid;

    fn admin_record() -> User {
        User {
            id: Uuid::now_v7(),
            email: "admin@example.com".to_string(),
            first_name: "Ad".to_string(),
            last_name: "Min".to_string(),
            phone: None,
            password_hash: PasswordService::new(1_000).hash("admin-password").unwrap(),
            role: "admin".to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    fn app(repo: MockUserRepository) -> Router {
        let tokens = Arc::new(TokenService::new(&test_auth_config()));
        let service = Arc::new(AuthService::new(
            Arc::new(repo),
            Arc::new(PasswordService::new(1_000)),
            tokens,
        ));

        Router::new()
            .merge(public_routes(Arc::clone(&service)))
            .merge(
                protected_routes(Arc::clone(&service))
                    .route_layer(from_fn_with_state(service, auth_middleware)),
            )
    }

    #[tokio::test]
    async fn test_login_then_me_with_sliding_token() {
        let user = admin_record();
        let mut repo = MockUserRepository::new();
        let by_email = user.clone();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(by_email.clone())));
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let server = TestServer::new(app(repo)).unwrap();

        let login = server
            .post("/api/auth/login")
            .json(&json!({"email": "admin@example.com", "password": "admin-password"}))
            .await;
        login.assert_status_ok();
        let body: Value = login.json();
        let token = body["data"]["access_token"].as_str().unwrap().to_string();
        assert!(login.headers().get(REFRESHED_TOKEN_HEADER).is_none());

        let me = server.get("/api/auth/me").authorization_bearer(&token).await;
        me.assert_status_ok();
        assert!(me.headers().get(REFRESHED_TOKEN_HEADER).is_some());
        let me_body: Value = me.json();
        assert_eq!(me_body["data"]["email"], "admin@example.com");
    }

    #[tokio::test]
    async fn test_me_without_token_is_401() {
        let server = TestServer::new(app(MockUserRepository::new())).unwrap();
        server.get("/api/auth/me").await.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_login_bad_credentials_is_401() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let server = TestServer::new(app(repo)).unwrap();
        let response = server
            .post("/api/auth/login")
            .json(&json!({"email": "ghost@example.com", "password": "whatever"}))
            .await;

        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid email or password");
    }

    #[tokio::test]
    async fn test_login_malformed_json_is_400() {
        let server = TestServer::new(app(MockUserRepository::new())).unwrap();
        let response = server
            .post("/api/auth/login")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_refresh_for_deactivated_account_is_403_without_token() {
        let mut user = admin_record();
        let token = TokenService::new(&test_auth_config())
            .issue(&AuthenticatedUser {
                user_id: user.id,
                email: user.email.clone(),
                roles: vec![user.role.clone()],
            })
            .unwrap()
            .token;
        user.is_active = false;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let server = TestServer::new(app(repo)).unwrap();
        let response = server
            .post("/api/auth/refresh")
            .authorization_bearer(&token)
            .await;

        response.assert_status_forbidden();
        assert!(response.headers().get(REFRESHED_TOKEN_HEADER).is_none());
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
