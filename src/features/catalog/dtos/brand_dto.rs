use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::catalog::models::Brand;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandResponseDto {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            id: b.id,
            name: b.name,
            logo_url: b.logo_url,
            order_number: b.order_number,
            is_active: b.is_active,
            audit: b.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBrandDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(url(message = "Logo URL must be a valid URL"))]
    pub logo_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBrandDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(url(message = "Logo URL must be a valid URL"))]
    pub logo_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
