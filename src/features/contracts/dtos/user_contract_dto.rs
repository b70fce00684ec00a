use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::contracts::models::UserContract;
use crate::shared::audit::AuditTrail;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserContractResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub contract_id: Uuid,
    pub accepted_at: DateTime<Utc>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<UserContract> for UserContractResponseDto {
    fn from(uc: UserContract) -> Self {
        Self {
            id: uc.id,
            user_id: uc.user_id,
            contract_id: uc.contract_id,
            accepted_at: uc.accepted_at,
            is_active: uc.is_active,
            audit: uc.audit,
        }
    }
}

/// Record that the user in the path accepted `contract_id` now
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserContractDto {
    pub contract_id: Uuid,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserContractDto {
    /// Point the acceptance at another contract; `accepted_at` is reset
    pub contract_id: Option<Uuid>,
    pub is_active: Option<bool>,
}
