use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::content::models::FooterItem;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FooterItemResponseDto {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub column_name: String,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<FooterItem> for FooterItemResponseDto {
    fn from(f: FooterItem) -> Self {
        Self {
            id: f.id,
            title: f.title,
            url: f.url,
            column_name: f.column_name,
            order_number: f.order_number,
            is_active: f.is_active,
            audit: f.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFooterItemDto {
    #[validate(
        length(min = 1, max = 100, message = "Title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    /// Absolute URL or site-relative path
    #[validate(
        length(min = 1, max = 500, message = "URL must be 1-500 characters"),
        custom(function = "not_blank")
    )]
    pub url: String,

    #[validate(

        length(min = 1, max = 100, message = "Column name must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub column_name: String,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFooterItemDto {
    #[validate(
        length(min = 1, max = 100, message = "Title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(

        length(min = 1, max = 500, message = "URL must be 1-500 characters"),

        custom(function = "not_blank")

    )]
    pub url: Option<String>,

    #[validate(

        length(min = 1, max = 100, message = "Column name must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub column_name: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
