use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::content::models::Slider;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SliderResponseDto {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link_url: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Slider> for SliderResponseDto {
    fn from(s: Slider) -> Self {
        Self {
            id: s.id,
            title: s.title,
            subtitle: s.subtitle,
            image_url: s.image_url,
            link_url: s.link_url,
            order_number: s.order_number,
            is_active: s.is_active,
            audit: s.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSliderDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[validate(length(max = 300, message = "Subtitle must not exceed 300 characters"))]
    pub subtitle: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,

    #[validate(

        length(min = 1, max = 500, message = "Link URL must be 1-500 characters"),

        custom(function = "not_blank")

    )]
    pub link_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSliderDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(length(max = 300, message = "Subtitle must not exceed 300 characters"))]
    pub subtitle: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(

        length(min = 1, max = 500, message = "Link URL must be 1-500 characters"),

        custom(function = "not_blank")

    )]
    pub link_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
