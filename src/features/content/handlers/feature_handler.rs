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
use crate::features::content::dtos::{CreateFeatureDto, FeatureResponseDto, UpdateFeatureDto};
use crate::features::content::services::FeatureService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List features
#[utoipa::path(
    get,
    path = "/api/features",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated features", body = ApiResponse<Vec<FeatureResponseDto>>),
    ),
    tag = "features"
)]
pub async fn list_features(
    State(service): State<Arc<FeatureService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<FeatureResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/features/{id}",
    params(("id" = Uuid, Path, description = "Feature ID")),
    responses(
        (status = 200, description = "Feature found", body = ApiResponse<FeatureResponseDto>),
        (status = 404, description = "Feature not found")
    ),
    tag = "features"
)]
pub async fn get_feature(
    State(service): State<Arc<FeatureService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<FeatureResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/features",
    request_body = CreateFeatureDto,
    responses(
        (status = 201, description = "Feature created", body = ApiResponse<FeatureResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "features",
    security(("bearer_auth" = []))
)]
pub async fn create_feature(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FeatureService>>,
    AppJson(dto): AppJson<CreateFeatureDto>,
) -> Result<(StatusCode, Json<ApiResponse<FeatureResponseDto>>)> {
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
    path = "/api/features/{id}",
    params(("id" = Uuid, Path, description = "Feature ID")),
    request_body = UpdateFeatureDto,
    responses(
        (status = 200, description = "Feature updated", body = ApiResponse<FeatureResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Feature not found"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "features",
    security(("bearer_auth" = []))
)]
pub async fn update_feature(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FeatureService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateFeatureDto>,
) -> Result<Json<ApiResponse<FeatureResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/features/{id}",
    params(("id" = Uuid, Path, description = "Feature ID")),
    responses(
        (status = 200, description = "Feature deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Feature not found")
    ),
    tag = "features",
    security(("bearer_auth" = []))
)]
pub async fn delete_feature(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<FeatureService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Feature deleted".to_string()),
        None,
    )))
}
