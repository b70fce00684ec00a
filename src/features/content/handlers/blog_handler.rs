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
use crate::features::content::dtos::{BlogResponseDto, CreateBlogDto, UpdateBlogDto};
use crate::features::content::services::BlogService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List blog posts, newest published first
#[utoipa::path(
    get,
    path = "/api/blogs",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated blog posts", body = ApiResponse<Vec<BlogResponseDto>>),
    ),
    tag = "blogs"
)]
pub async fn list_blogs(
    State(service): State<Arc<BlogService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<BlogResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog found", body = ApiResponse<BlogResponseDto>),
        (status = 404, description = "Blog not found")
    ),
    tag = "blogs"
)]
pub async fn get_blog(
    State(service): State<Arc<BlogService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogDto,
    responses(
        (status = 201, description = "Blog created", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "blogs",
    security(("bearer_auth" = []))
)]
pub async fn create_blog(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<BlogService>>,
    AppJson(dto): AppJson<CreateBlogDto>,
) -> Result<(StatusCode, Json<ApiResponse<BlogResponseDto>>)> {
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
    path = "/api/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog ID")),
    request_body = UpdateBlogDto,
    responses(
        (status = 200, description = "Blog updated", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Blog not found"),
        (status = 409, description = "Slug already in use")
    ),
    tag = "blogs",
    security(("bearer_auth" = []))
)]
pub async fn update_blog(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<BlogService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateBlogDto>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = Uuid, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Blog not found")
    ),
    tag = "blogs",
    security(("bearer_auth" = []))
)]
pub async fn delete_blog(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<BlogService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Blog deleted".to_string()),
        None,
    )))
}
