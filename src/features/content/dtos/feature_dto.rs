use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::content::models::Feature;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeatureResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Feature> for FeatureResponseDto {
    fn from(f: Feature) -> Self {
        Self {
            id: f.id,
            title: f.title,
            description: f.description,
            icon: f.icon,
            order_number: f.order_number,
            is_active: f.is_active,
            audit: f.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFeatureDto {
    #[validate(
        length(min = 1, max = 150, message = "Title must be 1-150 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    /// Icon name or URL, as understood by the storefront
    #[validate(length(max = 255, message = "Icon must not exceed 255 characters"))]
    pub icon: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFeatureDto {
    #[validate(
        length(min = 1, max = 150, message = "Title must be 1-150 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "Icon must not exceed 255 characters"))]
    pub icon: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
