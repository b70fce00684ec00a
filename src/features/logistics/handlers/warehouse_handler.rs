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
use crate::features::logistics::dtos::{CreateWarehouseDto, UpdateWarehouseDto, WarehouseResponseDto};
use crate::features::logistics::services::WarehouseService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List warehouses
#[utoipa::path(
    get,
    path = "/api/warehouses",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated warehouses", body = ApiResponse<Vec<WarehouseResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
    ),
    tag = "warehouses",
    security(("bearer_auth" = []))
)]
pub async fn list_warehouses(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<WarehouseService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<WarehouseResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/warehouses/{id}",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse found", body = ApiResponse<WarehouseResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Warehouse not found")
    ),
    tag = "warehouses",
    security(("bearer_auth" = []))
)]
pub async fn get_warehouse(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<WarehouseService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<WarehouseResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/warehouses",
    request_body = CreateWarehouseDto,
    responses(
        (status = 201, description = "Warehouse created", body = ApiResponse<WarehouseResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 409, description = "Code already in use")
    ),
    tag = "warehouses",
    security(("bearer_auth" = []))
)]
pub async fn create_warehouse(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<WarehouseService>>,
    AppJson(dto): AppJson<CreateWarehouseDto>,
) -> Result<(StatusCode, Json<ApiResponse<WarehouseResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/warehouses/{id}",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    request_body = UpdateWarehouseDto,
    responses(
        (status = 200, description = "Warehouse updated", body = ApiResponse<WarehouseResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Warehouse not found"),
        (status = 409, description = "Code already in use")
    ),
    tag = "warehouses",
    security(("bearer_auth" = []))
)]
pub async fn update_warehouse(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<WarehouseService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateWarehouseDto>,
) -> Result<Json<ApiResponse<WarehouseResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/warehouses/{id}",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    responses(
        (status = 200, description = "Warehouse deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Warehouse not found")
    ),
    tag = "warehouses",
    security(("bearer_auth" = []))
)]
pub async fn delete_warehouse(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<WarehouseService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Warehouse deleted".to_string()),
        None,
    )))
}
