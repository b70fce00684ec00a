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
use crate::features::content::dtos::{CreateMenuItemDto, MenuItemResponseDto, UpdateMenuItemDto};
use crate::features::content::services::MenuItemService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List menu items
#[utoipa::path(
    get,
    path = "/api/menu-items",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated menu items", body = ApiResponse<Vec<MenuItemResponseDto>>),
    ),
    tag = "menu-items"
)]
pub async fn list_menu_items(
    State(service): State<Arc<MenuItemService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<MenuItemResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/menu-items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item found", body = ApiResponse<MenuItemResponseDto>),
        (status = 404, description = "Menu item not found")
    ),
    tag = "menu-items"
)]
pub async fn get_menu_item(
    State(service): State<Arc<MenuItemService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<MenuItemResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/menu-items",
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "Menu item created", body = ApiResponse<MenuItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Label or order number already in use")
    ),
    tag = "menu-items",
    security(("bearer_auth" = []))
)]
pub async fn create_menu_item(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<MenuItemService>>,
    AppJson(dto): AppJson<CreateMenuItemDto>,
) -> Result<(StatusCode, Json<ApiResponse<MenuItemResponseDto>>)> {
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
    path = "/api/menu-items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "Menu item updated", body = ApiResponse<MenuItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Menu item not found"),
        (status = 409, description = "Label or order number already in use")
    ),
    tag = "menu-items",
    security(("bearer_auth" = []))
)]
pub async fn update_menu_item(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<MenuItemService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateMenuItemDto>,
) -> Result<Json<ApiResponse<MenuItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/menu-items/{id}",
    params(("id" = Uuid, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Menu item not found")
    ),
    tag = "menu-items",
    security(("bearer_auth" = []))
)]
pub async fn delete_menu_item(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<MenuItemService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Menu item deleted".to_string()),
        None,
    )))
}
