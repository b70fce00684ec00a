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
use crate::features::content::dtos::{CreateSliderDto, SliderResponseDto, UpdateSliderDto};
use crate::features::content::services::SliderService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List home page sliders ordered by order number
#[utoipa::path(
    get,
    path = "/api/sliders",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated sliders", body = ApiResponse<Vec<SliderResponseDto>>),
    ),
    tag = "sliders"
)]
pub async fn list_sliders(
    State(service): State<Arc<SliderService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<SliderResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider found", body = ApiResponse<SliderResponseDto>),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn get_slider(
    State(service): State<Arc<SliderService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<SliderResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/sliders",
    request_body = CreateSliderDto,
    responses(
        (status = 201, description = "Slider created", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "sliders",
    security(("bearer_auth" = []))
)]
pub async fn create_slider(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<SliderService>>,
    AppJson(dto): AppJson<CreateSliderDto>,
) -> Result<(StatusCode, Json<ApiResponse<SliderResponseDto>>)> {
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
    path = "/api/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slider ID")),
    request_body = UpdateSliderDto,
    responses(
        (status = 200, description = "Slider updated", body = ApiResponse<SliderResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Slider not found"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "sliders",
    security(("bearer_auth" = []))
)]
pub async fn update_slider(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<SliderService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateSliderDto>,
) -> Result<Json<ApiResponse<SliderResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders",
    security(("bearer_auth" = []))
)]
pub async fn delete_slider(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<SliderService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Slider deleted".to_string()),
        None,
    )))
}
