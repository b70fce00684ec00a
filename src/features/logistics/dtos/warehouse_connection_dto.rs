use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::logistics::models::WarehouseConnection;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WarehouseConnectionResponseDto {
    pub id: Uuid,
    pub warehouse_id: Uuid,
    pub channel_id: Uuid,
    pub external_reference: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<WarehouseConnection> for WarehouseConnectionResponseDto {
    fn from(c: WarehouseConnection) -> Self {
        Self {
            id: c.id,
            warehouse_id: c.warehouse_id,
            channel_id: c.channel_id,
            external_reference: c.external_reference,
            is_active: c.is_active,
            audit: c.audit,
        }
    }
}

/// Connect the warehouse in the path to `channel_id`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWarehouseConnectionDto {
    pub channel_id: Uuid,

    #[validate(

        length(min = 1, max = 100, message = "External reference must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub external_reference: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWarehouseConnectionDto {
    pub channel_id: Option<Uuid>,

    #[validate(

        length(min = 1, max = 100, message = "External reference must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub external_reference: Option<String>,

    pub is_active: Option<bool>,
}
