use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::content::models::MenuItem;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponseDto {
    pub id: Uuid,
    pub label: String,
    pub url: String,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<MenuItem> for MenuItemResponseDto {
    fn from(m: MenuItem) -> Self {
        Self {
            id: m.id,
            label: m.label,
            url: m.url,
            order_number: m.order_number,
            is_active: m.is_active,
            audit: m.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMenuItemDto {
    #[validate(
        length(min = 1, max = 100, message = "Label must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub label: String,

    #[validate(

        length(min = 1, max = 500, message = "URL must be 1-500 characters"),

        custom(function = "not_blank")

    )]
    pub url: String,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMenuItemDto {
    #[validate(
        length(min = 1, max = 100, message = "Label must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub label: Option<String>,

    #[validate(

        length(min = 1, max = 500, message = "URL must be 1-500 characters"),

        custom(function = "not_blank")

    )]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
