use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::guards::RequireAdmin;
use crate::features::contracts::dtos::{
    CreateUserContractDto, UpdateUserContractDto, UserContractResponseDto,
};
use crate::features::contracts::services::UserContractService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List the contracts a user has accepted, most recent first
#[utoipa::path(
    get,
    path = "/api/users/{id}/contracts",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Paginated acceptances", body = ApiResponse<Vec<UserContractResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "user-contracts",
    security(("bearer_auth" = []))
)]
pub async fn list_user_contracts(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<UserContractService>>,
    AppPath(user_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<UserContractResponseDto>>>> {
    let (items, meta) = service.list_for_user(user_id, &query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

/// Record that a user accepted a contract
#[utoipa::path(
    post,
    path = "/api/users/{id}/contracts",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = CreateUserContractDto,
    responses(
        (status = 201, description = "Acceptance recorded", body = ApiResponse<UserContractResponseDto>),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "User or contract not found"),
        (status = 409, description = "Contract already accepted by this user")
    ),
    tag = "user-contracts",
    security(("bearer_auth" = []))
)]
pub async fn create_user_contract(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<UserContractService>>,
    AppPath(user_id): AppPath<Uuid>,
    AppJson(dto): AppJson<CreateUserContractDto>,
) -> Result<(StatusCode, Json<ApiResponse<UserContractResponseDto>>)> {
    let created = service.create(user_id, dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/user-contracts/{id}",
    params(("id" = Uuid, Path, description = "User contract ID")),
    responses(
        (status = 200, description = "Acceptance found", body = ApiResponse<UserContractResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "User contract not found")
    ),
    tag = "user-contracts",
    security(("bearer_auth" = []))
)]
pub async fn get_user_contract(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<UserContractService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<UserContractResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    put,
    path = "/api/user-contracts/{id}",
    params(("id" = Uuid, Path, description = "User contract ID")),
    request_body = UpdateUserContractDto,
    responses(
        (status = 200, description = "Acceptance updated", body = ApiResponse<UserContractResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "User contract or contract not found"),
        (status = 409, description = "Contract already accepted by this user")
    ),
    tag = "user-contracts",
    security(("bearer_auth" = []))
)]
pub async fn update_user_contract(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<UserContractService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateUserContractDto>,
) -> Result<Json<ApiResponse<UserContractResponseDto>>> {
    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/user-contracts/{id}",
    params(("id" = Uuid, Path, description = "User contract ID")),
    responses(
        (status = 200, description = "Acceptance deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "User contract not found")
    ),
    tag = "user-contracts",
    security(("bearer_auth" = []))
)]
pub async fn delete_user_contract(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<UserContractService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("User contract deleted".to_string()),
        None,
    )))
}
