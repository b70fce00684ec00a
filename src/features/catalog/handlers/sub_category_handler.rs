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
use crate::features::catalog::dtos::{
    CreateSubCategoryDto, SubCategoryResponseDto, UpdateSubCategoryDto,
};
use crate::features::catalog::services::SubCategoryService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List sub-categories of a category, ordered by order number
#[utoipa::path(
    get,
    path = "/api/categories/{id}/sub-categories",
    params(
        ("id" = Uuid, Path, description = "Parent category ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Paginated sub-categories", body = ApiResponse<Vec<SubCategoryResponseDto>>),
        (status = 404, description = "Category not found")
    ),
    tag = "sub-categories"
)]
pub async fn list_sub_categories(
    State(service): State<Arc<SubCategoryService>>,
    AppPath(category_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<SubCategoryResponseDto>>>> {
    let (items, meta) = service.list_for_category(category_id, &query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/sub-categories/{id}",
    params(("id" = Uuid, Path, description = "Sub-category ID")),
    responses(
        (status = 200, description = "Sub-category found", body = ApiResponse<SubCategoryResponseDto>),
        (status = 404, description = "Sub-category not found")
    ),
    tag = "sub-categories"
)]
pub async fn get_sub_category(
    State(service): State<Arc<SubCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<SubCategoryResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Create a sub-category under the category in the path
#[utoipa::path(
    post,
    path = "/api/categories/{id}/sub-categories",
    params(("id" = Uuid, Path, description = "Parent category ID")),
    request_body = CreateSubCategoryDto,
    responses(
        (status = 201, description = "Sub-category created", body = ApiResponse<SubCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Slug or order number already used")
    ),
    tag = "sub-categories",
    security(("bearer_auth" = []))
)]
pub async fn create_sub_category(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<SubCategoryService>>,
    AppPath(category_id): AppPath<Uuid>,
    AppJson(dto): AppJson<CreateSubCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubCategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(category_id, dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

/// Update a sub-category; setting `category_id` moves it to another category
#[utoipa::path(
    put,
    path = "/api/sub-categories/{id}",
    params(("id" = Uuid, Path, description = "Sub-category ID")),
    request_body = UpdateSubCategoryDto,
    responses(
        (status = 200, description = "Sub-category updated", body = ApiResponse<SubCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Sub-category or category not found"),
        (status = 409, description = "Slug or order number already used")
    ),
    tag = "sub-categories",
    security(("bearer_auth" = []))
)]
pub async fn update_sub_category(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<SubCategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateSubCategoryDto>,
) -> Result<Json<ApiResponse<SubCategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/sub-categories/{id}",
    params(("id" = Uuid, Path, description = "Sub-category ID")),
    responses(
        (status = 200, description = "Sub-category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Sub-category not found")
    ),
    tag = "sub-categories",
    security(("bearer_auth" = []))
)]
pub async fn delete_sub_category(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<SubCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Sub-category deleted".to_string()),
        None,
    )))
}
