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
use crate::features::auth::model::AuthenticatedUser;
use crate::features::contracts::dtos::{ContractResponseDto, CreateContractDto, UpdateContractDto};
use crate::features::contracts::services::ContractService;
use crate::shared::types::{ApiResponse, ListQuery};

/// List contracts (any authenticated user)
#[utoipa::path(
    get,
    path = "/api/contracts",
    params(ListQuery),
    responses(
        (status = 200, description = "Paginated contracts", body = ApiResponse<Vec<ContractResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "contracts",
    security(("bearer_auth" = []))
)]
pub async fn list_contracts(
    _user: AuthenticatedUser,
    State(service): State<Arc<ContractService>>,
    AppQuery(query): AppQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ContractResponseDto>>>> {
    let (items, meta) = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(items), None, Some(meta))))
}

#[utoipa::path(
    get,
    path = "/api/contracts/{id}",
    params(("id" = Uuid, Path, description = "Contract ID")),
    responses(
        (status = 200, description = "Contract found", body = ApiResponse<ContractResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Contract not found")
    ),
    tag = "contracts",
    security(("bearer_auth" = []))
)]
pub async fn get_contract(
    _user: AuthenticatedUser,
    State(service): State<Arc<ContractService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<ContractResponseDto>>> {
    let item = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

#[utoipa::path(
    post,
    path = "/api/contracts",
    request_body = CreateContractDto,
    responses(
        (status = 201, description = "Contract created", body = ApiResponse<ContractResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 409, description = "Code already in use")
    ),
    tag = "contracts",
    security(("bearer_auth" = []))
)]
pub async fn create_contract(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ContractService>>,
    AppJson(dto): AppJson<CreateContractDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContractResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = service.create(dto, &user).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(created), None, None)),
    ))
}

/// Update a contract; changing the content bumps its version
#[utoipa::path(
    put,
    path = "/api/contracts/{id}",
    params(("id" = Uuid, Path, description = "Contract ID")),
    request_body = UpdateContractDto,
    responses(
        (status = 200, description = "Contract updated", body = ApiResponse<ContractResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Contract not found"),
        (status = 409, description = "Code already in use")
    ),
    tag = "contracts",
    security(("bearer_auth" = []))
)]
pub async fn update_contract(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<ContractService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateContractDto>,
) -> Result<Json<ApiResponse<ContractResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let updated = service.update(id, dto, &user).await?;
    Ok(Json(ApiResponse::success(Some(updated), None, None)))
}

#[utoipa::path(
    delete,
    path = "/api/contracts/{id}",
    params(("id" = Uuid, Path, description = "Contract ID")),
    responses(
        (status = 200, description = "Contract deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Contract not found")
    ),
    tag = "contracts",
    security(("bearer_auth" = []))
)]
pub async fn delete_contract(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<ContractService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Contract deleted".to_string()),
        None,
    )))
}
