use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::catalog::models::SubCategory;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::{SLUG_REGEX, not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubCategoryResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<SubCategory> for SubCategoryResponseDto {
    fn from(s: SubCategory) -> Self {
        Self {
            id: s.id,
            category_id: s.category_id,
            name: s.name,
            slug: s.slug,
            description: s.description,
            order_number: s.order_number,
            is_active: s.is_active,
            audit: s.audit,
        }
    }
}

/// The parent category comes from the path
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSubCategoryDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase letters, digits and single hyphens"))]
    pub slug: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

/// Setting `category_id` moves the sub-category to another parent
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSubCategoryDto {
    pub category_id: Option<Uuid>,

    #[validate(

        length(min = 1, max = 100, message = "Name must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub name: Option<String>,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase letters, digits and single hyphens"))]
    pub slug: Option<String>,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
