use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::logistics::models::Channel;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::{CODE_REGEX, not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChannelResponseDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Channel> for ChannelResponseDto {
    fn from(c: Channel) -> Self {
        Self {
            id: c.id,
            name: c.name,
            code: c.code,
            is_active: c.is_active,
            audit: c.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateChannelDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 50, message = "Code must be 1-50 characters"),
        regex(path = *CODE_REGEX, message = "Code must be uppercase letters, digits, '_' or '-'")
    )]
    pub code: String,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateChannelDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        length(min = 1, max = 50, message = "Code must be 1-50 characters"),
        regex(path = *CODE_REGEX, message = "Code must be uppercase letters, digits, '_' or '-'")
    )]
    pub code: Option<String>,

    pub is_active: Option<bool>,
}
