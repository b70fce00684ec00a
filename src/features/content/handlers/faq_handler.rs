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
use crate::features::content::dtos::{CreateFaqDto, FaqResponseDto, UpdateFaqDto};
use crate::features::content::services::FaqService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List FAQs
#[utoipa::path(
    get,
    path = "/api/faqs",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated FAQs", body = ApiResponse<Vec<FaqResponseDto>>),
    ),
    tag = "faqs"
)]
pub async fn list_faqs(
    State(service): State<Arc<FaqService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<FaqResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    responses(
        (status = 200, description = "FAQ found", body = ApiResponse<FaqResponseDto>),
        (status = 404, description = "FAQ not found")
    ),
    tag = "faqs"
)]
pub async fn get_faq(
    State(service): State<Arc<FaqService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<FaqResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/faqs",
    request_body = CreateFaqDto,
    responses(
        (status = 201, description = "FAQ created", body = ApiResponse<FaqResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "faqs",
    security(("bearer_auth" = []))
)]
pub async fn create_faq(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FaqService>>,
    AppJson(dto): AppJson<CreateFaqDto>,
) -> Result<(StatusCode, Json<ApiResponse<FaqResponseDto>>)> {
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
    path = "/api/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    request_body = UpdateFaqDto,
    responses(
        (status = 200, description = "FAQ updated", body = ApiResponse<FaqResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "FAQ not found"),
        (status = 409, description = "Order number already in use")
    ),
    tag = "faqs",
    security(("bearer_auth" = []))
)]
pub async fn update_faq(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<FaqService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateFaqDto>,
) -> Result<Json<ApiResponse<FaqResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ ID")),
    responses(
        (status = 200, description = "FAQ deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "FAQ not found")
    ),
    tag = "faqs",
    security(("bearer_auth" = []))
)]
pub async fn delete_faq(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<FaqService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("FAQ deleted".to_string()),
        None,
    )))
}
