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
use crate::features::catalog::dtos::{CreateFeaturedCategoryDto, FeaturedCategoryResponseDto, UpdateFeaturedCategoryDto};
use crate::features::catalog::services::FeaturedCategoryService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List featured categories
#[utoipa::path(
    get,
    path = "/api/featured-categories",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated featured categories", body = ApiResponse<Vec<FeaturedCategoryResponseDto>>),
    ),
    tag = "featured-categories"
)]
pub async fn list_featured_categories(
    State(service): State<Arc<FeaturedCategoryService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<FeaturedCategoryResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/featured-categories/{id}",
    params(("id" = Uuid, Path, description = "Featured category ID")),
    responses(
        (status = 200, description = "Featured category found", body = ApiResponse<FeaturedCategoryResponseDto>),
        (status = 404, description = "Featured category not found")
    ),
    tag = "featured-categories"
)]
pub async fn get_featured_category(
    State(service): State<Arc<FeaturedCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<FeaturedCategoryResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/featured-categories",
    request_body = CreateFeaturedCategoryDto,
    responses(
        (status = 201, description = "Featured category created", body = ApiResponse<FeaturedCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "featured-categories",
    security(("bearer_auth" = []))
)]
pub async fn create_featured_category(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FeaturedCategoryService>>,
    AppJson(dto): AppJson<CreateFeaturedCategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<FeaturedCategoryResponseDto>>)> {
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
    path = "/api/featured-categories/{id}",
    params(("id" = Uuid, Path, description = "Featured category ID")),
    request_body = UpdateFeaturedCategoryDto,
    responses(
        (status = 200, description = "Featured category updated", body = ApiResponse<FeaturedCategoryResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Featured category not found"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "featured-categories",
    security(("bearer_auth" = []))
)]
pub async fn update_featured_category(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FeaturedCategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateFeaturedCategoryDto>,
) -> Result<Json<ApiResponse<FeaturedCategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/featured-categories/{id}",
    params(("id" = Uuid, Path, description = "Featured category ID")),
    responses(
        (status = 200, description = "Featured category deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Featured category not found")
    ),
    tag = "featured-categories",
    security(("bearer_auth" = []))
)]
pub async fn delete_featured_category(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<FeaturedCategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Featured category deleted".to_string()),
        None,
    )))
}
