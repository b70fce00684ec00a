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
use crate::features::content::dtos::{CreateFooterItemDto, FooterItemResponseDto, UpdateFooterItemDto};
use crate::features::content::services::FooterItemService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List footer items grouped by column
#[utoipa::path(
    get,
    path = "/api/footer-items",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated footer items", body = ApiResponse<Vec<FooterItemResponseDto>>),
    ),
    tag = "footer-items"
)]
pub async fn list_footer_items(
    State(service): State<Arc<FooterItemService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<FooterItemResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/footer-items/{id}",
    params(("id" = Uuid, Path, description = "Footer item ID")),
    responses(
        (status = 200, description = "Footer item found", body = ApiResponse<FooterItemResponseDto>),
        (status = 404, description = "Footer item not found")
    ),
    tag = "footer-items"
)]
pub async fn get_footer_item(
    State(service): State<Arc<FooterItemService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<FooterItemResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/footer-items",
    request_body = CreateFooterItemDto,
    responses(
        (status = 201, description = "Footer item created", body = ApiResponse<FooterItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Order number already in use in that column")
    ),
    tag = "footer-items",
    security(("bearer_auth" = []))
)]
pub async fn create_footer_item(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FooterItemService>>,
    AppJson(dto): AppJson<CreateFooterItemDto>,
) -> Result<(StatusCode, Json<ApiResponse<FooterItemResponseDto>>)> {
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
    path = "/api/footer-items/{id}",
    params(("id" = Uuid, Path, description = "Footer item ID")),
    request_body = UpdateFooterItemDto,
    responses(
        (status = 200, description = "Footer item updated", body = ApiResponse<FooterItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Footer item not found"),
        (status = 409, description = "Order number already in use in that column")
    ),
    tag = "footer-items",
    security(("bearer_auth" = []))
)]
pub async fn update_footer_item(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FooterItemService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateFooterItemDto>,
) -> Result<Json<ApiResponse<FooterItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/footer-items/{id}",
    params(("id" = Uuid, Path, description = "Footer item ID")),
    responses(
        (status = 200, description = "Footer item deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Footer item not found")
    ),
    tag = "footer-items",
    security(("bearer_auth" = []))
)]
pub async fn delete_footer_item(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<FooterItemService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Footer item deleted".to_string()),
        None,
    )))
}
