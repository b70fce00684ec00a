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
use crate::features::contact_forms::dtos::{
    ContactFormResponseDto, CreateContactFormDto, MarkContactFormReadDto,
};
use crate::features::contact_forms::services::ContactFormService;
use crate::shared::types::{ApiResponse, ListQuery};

/// Submit a message from the contact page
#[utoipa::path(
    post,
    path = "/api/contact-forms",
    request_body = CreateContactFormDto,
    responses(
        (status = 201, description = "Message received", body = ApiResponse<ContactFormResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "contact-forms"
)]
pub async fn submit_contact_form(
    State(service): State<Arc<ContactFormService>>,
    AppJson(dto): AppJson<CreateContactFormDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactFormResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.submit(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(created),
            Some("Thank you, we will get back to you soon".to_string()),
            None,
        )),
    ))
}

/// List received messages, unread first
#[utoipa::path(
    get,
    path = "/api/contact-forms",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated messages", body = ApiResponse<Vec<ContactFormResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required")
    ),
    tag = "contact-forms",
    security(("bearer_auth" = []))
)]
pub async fn list_contact_forms(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<ContactFormService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ContactFormResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/contact-forms/{id}",
    params(("id" = Uuid, Path, description = "Contact form ID")),
    responses(
        (status = 200, description = "Message found", body = ApiResponse<ContactFormResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Message not found")
    ),
    tag = "contact-forms",
    security(("bearer_auth" = []))
)]
pub async fn get_contact_form(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<ContactFormService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ContactFormResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Mark a message read or unread
#[utoipa::path(
    put,
    path = "/api/contact-forms/{id}/read",
    params(("id" = Uuid, Path, description = "Contact form ID")),
    request_body = MarkContactFormReadDto,
    responses(
        (status = 200, description = "Read flag updated", body = ApiResponse<ContactFormResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Message not found")
    ),
    tag = "contact-forms",
    security(("bearer_auth" = []))
)]
pub async fn mark_contact_form_read(
    RequireEditor(user): RequireEditor,
    State(service): State<Arc<ContactFormService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<MarkContactFormReadDto>,
) -> Result<Json<ApiResponse<ContactFormResponseDto>>> {
    let updated = service.mark_read(id, dto.is_read, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/contact-forms/{id}",
    params(("id" = Uuid, Path, description = "Contact form ID")),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Editor access required"),
        (status = 404, description = "Message not found")
    ),
    tag = "contact-forms",
    security(("bearer_auth" = []))
)]
pub async fn delete_contact_form(
    RequireEditor(_user): RequireEditor,
    State(service): State<Arc<ContactFormService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Contact form deleted".to_string()),
        None,
    )))
}
