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
use crate::features::logistics::dtos::{
    CreateWarehouseConnectionDto, UpdateWarehouseConnectionDto, WarehouseConnectionResponseDto,
};
use crate::features::logistics::services::WarehouseConnectionService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List the channels a warehouse is connected to
#[utoipa::path(
    get,
    path = "/api/warehouses/{id}/connections",
    params(
        ("id" = Uuid, Path, description = "Warehouse ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Paginated connections", body = ApiResponse<Vec<WarehouseConnectionResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Warehouse not found")
    ),
    tag = "warehouse-connections",
    security(("bearer_auth" = []))
)]
pub async fn list_warehouse_connections(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<WarehouseConnectionService>>,
    AppPath(warehouse_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<WarehouseConnectionResponseDto>>>> {
    let (items, meta) = service.list_for_warehouse(warehouse_id, &query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

/// Connect a warehouse to a sales channel
#[utoipa::path(
    post,
    path = "/api/warehouses/{id}/connections",
    params(("id" = Uuid, Path, description = "Warehouse ID")),
    request_body = CreateWarehouseConnectionDto,
    responses(
        (status = 201, description = "Connection created", body = ApiResponse<WarehouseConnectionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Warehouse or channel not found"),
        (status = 409, description = "Warehouse already connected to this channel")
    ),
    tag = "warehouse-connections",
    security(("bearer_auth" = []))
)]
pub async fn create_warehouse_connection(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<WarehouseConnectionService>>,
    AppPath(warehouse_id): AppPath<Uuid>,
    AppJson(dto): AppJson<CreateWarehouseConnectionDto>,
) -> Result<(StatusCode, Json<ApiResponse<WarehouseConnectionResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(warehouse_id, dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/warehouse-connections/{id}",
    params(("id" = Uuid, Path, description = "Connection ID")),
    responses(
        (status = 200, description = "Connection found", body = ApiResponse<WarehouseConnectionResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Connection not found")
    ),
    tag = "warehouse-connections",
    security(("bearer_auth" = []))
)]
pub async fn get_warehouse_connection(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<WarehouseConnectionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<WarehouseConnectionResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    put,
    path = "/api/warehouse-connections/{id}",
    params(("id" = Uuid, Path, description = "Connection ID")),
    request_body = UpdateWarehouseConnectionDto,
    responses(
        (status = 200, description = "Connection updated", body = ApiResponse<WarehouseConnectionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Connection or channel not found"),
        (status = 409, description = "Warehouse already connected to this channel")
    ),
    tag = "warehouse-connections",
    security(("bearer_auth" = []))
)]
pub async fn update_warehouse_connection(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<WarehouseConnectionService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateWarehouseConnectionDto>,
) -> Result<Json<ApiResponse<WarehouseConnectionResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/warehouse-connections/{id}",
    params(("id" = Uuid, Path, description = "Connection ID")),
    responses(
        (status = 200, description = "Connection deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Connection not found")
    ),
    tag = "warehouse-connections",
    security(("bearer_auth" = []))
)]
pub async fn delete_warehouse_connection(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<WarehouseConnectionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Warehouse connection deleted".to_string()),
        None,
    )))
}
