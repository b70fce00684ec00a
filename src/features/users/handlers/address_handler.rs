use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::auth::guards::RequireAdmin;
use crate::features::users::dtos::{AddressResponseDto, CreateAddressDto, UpdateAddressDto};
use crate::features::users::services::AddressService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List a user's addresses, default first
#[utoipa::path(
    get,
    path = "/api/users/{id}/addresses",
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Paginated addresses", body = ApiResponse<Vec<AddressResponseDto>>),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "addresses",
    security(("bearer_auth" = []))
)]
pub async fn list_user_addresses(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AddressService>>,
    AppPath(user_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<AddressResponseDto>>>> {
    let (addresses, meta) = service.list_for_user(user_id, &query).await?;
    Ok(Json(ApiResponse::success(Some(addresses), None, Some(meta))))
}

/// Add an address to a user
#[utoipa::path(
    post,
    path = "/api/users/{id}/addresses",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = CreateAddressDto,
    responses(
        (status = 201, description = "Address created", body = ApiResponse<AddressResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "User not found")
    ),
    tag = "addresses",
    security(("bearer_auth" = []))
)]
pub async fn create_address(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<AddressService>>,
    AppPath(user_id): AppPath<Uuid>,
    AppJson(dto): AppJson<CreateAddressDto>,
) -> Result<(StatusCode, Json<ApiResponse<AddressResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(user_id, dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/addresses/{id}",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Address found", body = ApiResponse<AddressResponseDto>),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Address not found")
    ),
    tag = "addresses",
    security(("bearer_auth" = []))
)]
pub async fn get_address(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AddressService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<AddressResponseDto>>> {
    let address = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(address), None, None)))
}

#[utoipa::path(
    put,
    path = "/api/addresses/{id}",
    params(("id" = Uuid, Path, description = "Address ID")),
    request_body = UpdateAddressDto,
    responses(
        (status = 200, description = "Address updated", body = ApiResponse<AddressResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Address not found")
    ),
    tag = "addresses",
    security(("bearer_auth" = []))
)]
pub async fn update_address(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<AddressService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateAddressDto>,
) -> Result<Json<ApiResponse<AddressResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Address deleted"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Address not found")
    ),
    tag = "addresses",
    security(("bearer_auth" = []))
)]
pub async fn delete_address(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AddressService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Address deleted".to_string()),
        None,
    )))
}
