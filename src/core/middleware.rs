use crate::core::error::AppError;
use crate::features::auth::services::AuthService;
use crate::shared::constants::REFRESHED_TOKEN_HEADER;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// CORS for the admin frontend. The refreshed-token header is exposed so
/// browsers can read the reissued token.
pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(REFRESHED_TOKEN_HEADER)]);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        // Parse origins into HeaderValue
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            let mut response = Response::new(Body::from("Unauthorized"));
            *response.status_mut() = StatusCode::UNAUTHORIZED;
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"Swagger UI\""),
            );

            Err(response)
        })
    }
}

/// Bearer token authentication with sliding expiration.
///
/// The token only identifies the caller: the account is reloaded on every
/// request, so a deleted account gets 401 and an inactive one 403. The
/// current [`AuthenticatedUser`] goes into the request extensions. After the
/// handler runs, a fresh token built from that same identity is attached as
/// the `x-refreshed-token` response header, except on 401 and 403 responses.
///
/// [`AuthenticatedUser`]: crate::features::auth::model::AuthenticatedUser
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    // Validate Bearer format
    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AppError::Unauthorized("Invalid authorization header format".to_string())
        })?;

    let user = auth.authenticate(token).await?;

    req.extensions_mut().insert(user.clone());
    let mut response = next.run(req).await;

    if matches!(
        response.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ) {
        return Ok(response);
    }

    match auth.reissue(&user) {
        Ok(token) => match HeaderValue::from_str(&token) {
            Ok(value) => {
                response
                    .headers_mut()
                    .insert(HeaderName::from_static(REFRESHED_TOKEN_HEADER), value);
            }
            Err(e) => tracing::warn!("Refreshed token is not a valid header value: {}", e),
        },
        Err(e) => tracing::warn!("Failed to reissue token for {}: {}", user.user_id, e),
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::model::AuthenticatedUser;
    use crate::features::auth::services::{PasswordService, TokenService};
    use crate::features::users::models::User;
    use crate::features::users::repositories::MockUserRepository;
    use crate::shared::audit::AuditTrail;
    use crate::shared::test_helpers::test_auth_config;
    use axum::{middleware::from_fn_with_state, routing::get, Router};
    use axum_test::TestServer;

    async fn whoami(user: AuthenticatedUser) -> String {
        format!("{} {}", user.email, user.roles.join(","))
    }

    async fn always_unauthorized() -> AppError {
        AppError::Unauthorized("nope".to_string())
    }

    async fn always_forbidden() -> AppError {
        AppError::Forbidden("Admin access required".to_string())
    }

    fn tokens() -> TokenService {
        TokenService::new(&test_auth_config())
    }

    fn stored(role: &str, is_active: bool) -> User {
        User {
            id: Uuid::now_v7(),
            email: "staff@example.com".to_string(),
            first_name: "Staff".to_string(),
            last_name: "Member".to_string(),
            phone: None,
            password_hash: "unused".to_string(),
            role: role.to_string(),
            is_active,
            audit: AuditTrail::created(None),
        }
    }

    /// Token as it was issued at login, possibly with an outdated role
    fn token_for(user: &User, role: &str) -> String {
        let claims = AuthenticatedUser {
            user_id: user.id,
            email: user.email.clone(),
            roles: vec![role.to_string()],
        };
        tokens().issue(&claims).unwrap().token
    }

    fn server(repo: MockUserRepository) -> TestServer {
        let auth = Arc::new(AuthService::new(
            Arc::new(repo),
            Arc::new(PasswordService::new(1_000)),
            Arc::new(tokens()),
        ));
        let app = Router::new()
            .route("/whoami", get(whoami))
            .route("/denied", get(always_unauthorized))
            .route("/forbidden", get(always_forbidden))
            .route_layer(from_fn_with_state(auth, auth_middleware));
        TestServer::new(app).unwrap()
    }

    fn repo_returning(user: User) -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        repo
    }

    #[tokio::test]
    async fn test_missing_header_is_401() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let response = server(repo).get("/whoami").await;

        response.assert_status_unauthorized();
        assert!(response.headers().get(REFRESHED_TOKEN_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_401() {
        let response = server(MockUserRepository::new())
            .get("/whoami")
            .add_header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_invalid_token_is_401() {
        let response = server(MockUserRepository::new())
            .get("/whoami")
            .authorization_bearer("definitely-not-a-jwt")
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_valid_token_gets_refreshed_token() {
        let user = stored("editor", true);
        let token = token_for(&user, "editor");
        let user_id = user.id;

        let response = server(repo_returning(user))
            .get("/whoami")
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        response.assert_text("staff@example.com editor");

        let refreshed = response.header(REFRESHED_TOKEN_HEADER);
        let identity = tokens().validate(refreshed.to_str().unwrap()).unwrap();
        assert_eq!(identity.user_id, user_id);
    }

    #[tokio::test]
    async fn test_demoted_user_loses_old_role() {
        let user = stored("customer", true);
        let token = token_for(&user, "admin");

        let response = server(repo_returning(user))
            .get("/whoami")
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        response.assert_text("staff@example.com customer");

        let refreshed = response.header(REFRESHED_TOKEN_HEADER);
        let identity = tokens().validate(refreshed.to_str().unwrap()).unwrap();
        assert_eq!(identity.roles, vec!["customer".to_string()]);
    }

    #[tokio::test]
    async fn test_inactive_user_is_403_without_refresh() {
        let user = stored("admin", false);
        let token = token_for(&user, "admin");

        let response = server(repo_returning(user))
            .get("/whoami")
            .authorization_bearer(&token)
            .await;

        response.assert_status_forbidden();
        assert!(response.headers().get(REFRESHED_TOKEN_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_deleted_user_is_401() {
        let user = stored("editor", true);
        let token = token_for(&user, "editor");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let response = server(repo)
            .get("/whoami")
            .authorization_bearer(&token)
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_no_refresh_on_401_response() {
        let user = stored("editor", true);
        let token = token_for(&user, "editor");

        let response = server(repo_returning(user))
            .get("/denied")
            .authorization_bearer(&token)
            .await;

        response.assert_status_unauthorized();
        assert!(response.headers().get(REFRESHED_TOKEN_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_no_refresh_on_403_response() {
        let user = stored("editor", true);
        let token = token_for(&user, "editor");

        let response = server(repo_returning(user))
            .get("/forbidden")
            .authorization_bearer(&token)
            .await;

        response.assert_status_forbidden();
        assert!(response.headers().get(REFRESHED_TOKEN_HEADER).is_none());
    }
}
