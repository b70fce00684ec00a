#[cfg(test)]
use crate::core::config::AuthConfig;
#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::shared::constants::{ROLE_ADMIN, ROLE_CUSTOMER, ROLE_EDITOR};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};
#[cfg(test)]
use std::time::Duration;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
fn user_with_role(email: &str, role: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: Uuid::now_v7(),
        email: email.to_string(),
        roles: vec![role.to_string()],
    }
}

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    user_with_role("admin@example.com", ROLE_ADMIN)
}

#[cfg(test)]
pub fn create_editor_user() -> AuthenticatedUser {
    user_with_role("editor@example.com", ROLE_EDITOR)
}

#[cfg(test)]
pub fn create_customer_user() -> AuthenticatedUser {
    user_with_role("customer@example.com", ROLE_CUSTOMER)
}

/// Auth settings for tests, cheap hashing rounds
#[cfg(test)]
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
        issuer: "rental-catalog".to_string(),
        audience: "rental-catalog-admin".to_string(),
        access_token_ttl: Duration::from_secs(3600),
        jwt_leeway: Duration::from_secs(0),
        password_hash_rounds: 1_000,
    }
}

/// Put `user` into request extensions, standing in for `auth_middleware`
#[cfg(test)]
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
        },
    ))
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}
