use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::catalog::models::FeaturedCategory;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeaturedCategoryResponseDto {
    pub id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<FeaturedCategory> for FeaturedCategoryResponseDto {
    fn from(f: FeaturedCategory) -> Self {
        Self {
            id: f.id,
            category_id: f.category_id,
            title: f.title,
            image_url: f.image_url,
            order_number: f.order_number,
            is_active: f.is_active,
            audit: f.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFeaturedCategoryDto {
    pub category_id: Uuid,

    #[validate(

        length(min = 1, max = 150, message = "Title must be 1-150 characters"),

        custom(function = "not_blank")

    )]
    pub title: String,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFeaturedCategoryDto {
    pub category_id: Option<Uuid>,

    #[validate(

        length(min = 1, max = 150, message = "Title must be 1-150 characters"),

        custom(function = "not_blank")

    )]
    pub title: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
