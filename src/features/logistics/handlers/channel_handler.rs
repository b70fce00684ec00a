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
use crate::features::logistics::dtos::{ChannelResponseDto, CreateChannelDto, UpdateChannelDto};
use crate::features::logistics::services::ChannelService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List sales channels
#[utoipa::path(
    get,
    path = "/api/channels",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated sales channels", body = ApiResponse<Vec<ChannelResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
    ),
    tag = "channels",
    security(("bearer_auth" = []))
)]
pub async fn list_channels(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ChannelService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ChannelResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/channels/{id}",
    params(("id" = Uuid, Path, description = "Channel ID")),
    responses(
        (status = 200, description = "Channel found", body = ApiResponse<ChannelResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Channel not found")
    ),
    tag = "channels",
    security(("bearer_auth" = []))
)]
pub async fn get_channel(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ChannelService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ChannelResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/channels",
    request_body = CreateChannelDto,
    responses(
        (status = 201, description = "Channel created", body = ApiResponse<ChannelResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 409, description = "Code already in use")
    ),
    tag = "channels",
    security(("bearer_auth" = []))
)]
pub async fn create_channel(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ChannelService>>,
    AppJson(dto): AppJson<CreateChannelDto>,
) -> Result<(StatusCode, Json<ApiResponse<ChannelResponseDto>>)> {
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
    path = "/api/channels/{id}",
    params(("id" = Uuid, Path, description = "Channel ID")),
    request_body = UpdateChannelDto,
    responses(
        (status = 200, description = "Channel updated", body = ApiResponse<ChannelResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Channel not found"),
        (status = 409, description = "Code already in use")
    ),
    tag = "channels",
    security(("bearer_auth" = []))
)]
pub async fn update_channel(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ChannelService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateChannelDto>,
) -> Result<Json<ApiResponse<ChannelResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/channels/{id}",
    params(("id" = Uuid, Path, description = "Channel ID")),
    responses(
        (status = 200, description = "Channel deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Channel not found")
    ),
    tag = "channels",
    security(("bearer_auth" = []))
)]
pub async fn delete_channel(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ChannelService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Channel deleted".to_string()),
        None,
    )))
}
