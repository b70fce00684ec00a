use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contracts::models::Contract;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::{CODE_REGEX, not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContractResponseDto {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub content: String,
    pub version: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Contract> for ContractResponseDto {
    fn from(c: Contract) -> Self {
        Self {
            id: c.id,
            title: c.title,
            code: c.code,
            content: c.content,
            version: c.version,
            is_active: c.is_active,
            audit: c.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContractDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    /// Stable identifier, e.g. `RENTAL_TERMS`
    #[validate(
        length(min = 1, max = 50, message = "Code must be 1-50 characters"),
        regex(path = *CODE_REGEX, message = "Code must be uppercase letters, digits, '_' or '-'")
    )]
    pub code: String,

    #[validate(

        length(min = 1, message = "Content is required"),

        custom(function = "not_blank")

    )]
    pub content: String,

    pub is_active: Option<bool>,
}

/// Changing `content` publishes a new version
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateContractDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(
        length(min = 1, max = 50, message = "Code must be 1-50 characters"),
        regex(path = *CODE_REGEX, message = "Code must be uppercase letters, digits, '_' or '-'")
    )]
    pub code: Option<String>,

    #[validate(

        length(min = 1, message = "Content must not be empty"),

        custom(function = "not_blank")

    )]
    pub content: Option<String>,

    pub is_active: Option<bool>,
}
