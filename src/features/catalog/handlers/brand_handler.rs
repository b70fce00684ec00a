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
use crate::features::auth::guards::RequireEditor;
use crate::features::catalog::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::catalog::services::BrandService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List brands
#[utoipa::path(
    get,
    path = "/api/brands",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated brands", body = ApiResponse<Vec<BrandResponseDto>>),
    ),
    tag = "brands"
)]
pub async fn list_brands(
    State(service): State<Arc<BrandService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<BrandResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand found", body = ApiResponse<BrandResponseDto>),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands"
)]
pub async fn get_brand(
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<BrandResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Name or order number already in use")
    ),
    tag = "brands",
    security(("bearer_auth" = []))
)]
pub async fn create_brand(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<BrandService>>,
    AppJson(dto): AppJson<CreateBrandDto>,
) -> Result<(StatusCode, Json<ApiResponse<BrandResponseDto>>)> {
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
    path = "/api/brands/{id}",
    params(("id" = Uuid, Path, description = "Brand ID")),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand updated", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Brand not found"),
        (status = 409, description = "Name or order number already in use")
    ),
    tag = "brands",
    security(("bearer_auth" = []))
)]
pub async fn update_brand(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateBrandDto>,
) -> Result<Json<ApiResponse<BrandResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands",
    security(("bearer_auth" = []))
)]
pub async fn delete_brand(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<BrandService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Brand deleted".to_string()),
        None,
    )))
}
