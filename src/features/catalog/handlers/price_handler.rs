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
use crate::features::catalog::dtos::{CreatePriceDto, PriceResponseDto, UpdatePriceDto};
use crate::features::catalog::services::PriceService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List price ranges
#[utoipa::path(
    get,
    path = "/api/prices",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated price ranges", body = ApiResponse<Vec<PriceResponseDto>>),
    ),
    tag = "prices"
)]
pub async fn list_prices(
    State(service): State<Arc<PriceService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<PriceResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/prices/{id}",
    params(("id" = Uuid, Path, description = "Price ID")),
    responses(
        (status = 200, description = "Price found", body = ApiResponse<PriceResponseDto>),
        (status = 404, description = "Price not found")
    ),
    tag = "prices"
)]
pub async fn get_price(
    State(service): State<Arc<PriceService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<PriceResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/prices",
    request_body = CreatePriceDto,
    responses(
        (status = 201, description = "Price created", body = ApiResponse<PriceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Label or order number already in use")
    ),
    tag = "prices",
    security(("bearer_auth" = []))
)]
pub async fn create_price(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<PriceService>>,
    AppJson(dto): AppJson<CreatePriceDto>,
) -> Result<(StatusCode, Json<ApiResponse<PriceResponseDto>>)> {
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
    path = "/api/prices/{id}",
    params(("id" = Uuid, Path, description = "Price ID")),
    request_body = UpdatePriceDto,
    responses(
        (status = 200, description = "Price updated", body = ApiResponse<PriceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Price not found"),
        (status = 409, description = "Label or order number already in use")
    ),
    tag = "prices",
    security(("bearer_auth" = []))
)]
pub async fn update_price(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<PriceService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdatePriceDto>,
) -> Result<Json<ApiResponse<PriceResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/prices/{id}",
    params(("id" = Uuid, Path, description = "Price ID")),
    responses(
        (status = 200, description = "Price deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Price not found")
    ),
    tag = "prices",
    security(("bearer_auth" = []))
)]
pub async fn delete_price(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<PriceService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Price deleted".to_string()),
        None,
    )))
}
