use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Expected request with `Content-Type: application/json`".to_string()
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        tracing::debug!("Rejected JSON body: {}", message);
        AppError::BadRequest(message).into_response()
    }
}

/// Path extractor that answers malformed parameters with the error envelope
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(PathRejection::FailedToDeserializePathParams(err)) => {
                tracing::debug!("Rejected path parameters: {}", err.body_text());
                Err(AppError::BadRequest(format!(
                    "Invalid path parameter: {}",
                    err.body_text()
                )))
            }
            Err(rejection) => Err(AppError::Internal(rejection.body_text())),
        }
    }
}

/// Query string extractor with the same error envelope as [`AppJson`]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(QueryRejection::FailedToDeserializeQueryString(err)) => {
                tracing::debug!("Rejected query string: {}", err.body_text());
                Err(AppError::BadRequest(format!(
                    "Invalid query string: {}",
                    err.body_text()
                )))
            }
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::ListQuery;
    use axum::{routing::get, Router};
    use axum_test::TestServer;
    use serde_json::Value;
    use uuid::Uuid;

    async fn by_id(AppPath(id): AppPath<Uuid>) -> String {
        id.to_string()
    }

    async fn page(AppQuery(query): AppQuery<ListQuery>) -> String {
        query.page.to_string()
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/items", get(page))
            .route("/items/{id}", get(by_id));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_valid_path_and_query() {
        let id = Uuid::now_v7();
        let server = server();

        server
            .get(&format!("/items/{id}"))
            .await
            .assert_text(id.to_string());
        server.get("/items?page=3").await.assert_text("3");
    }

    #[tokio::test]
    async fn test_malformed_uuid_uses_error_envelope() {
        let response = server().get("/items/not-a-uuid").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid path parameter"));
    }

    #[tokio::test]
    async fn test_malformed_query_uses_error_envelope() {
        let response = server().get("/items?page=first").await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid query string"));
    }
}
