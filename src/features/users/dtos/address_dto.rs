use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::Address;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressResponseDto {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub city: String,
    pub district: String,
    pub address_line: String,
    pub postal_code: Option<String>,
    pub is_default: bool,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Address> for AddressResponseDto {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            user_id: a.user_id,
            title: a.title,
            city: a.city,
            district: a.district,
            address_line: a.address_line,
            postal_code: a.postal_code,
            is_default: a.is_default,
            is_active: a.is_active,
            audit: a.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAddressDto {
    #[validate(
        length(min = 1, max = 100, message = "Title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[validate(

        length(min = 1, max = 100, message = "City must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub city: String,

    #[validate(

        length(min = 1, max = 100, message = "District must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub district: String,

    #[validate(

        length(min = 1, max = 500, message = "Address line must be 1-500 characters"),

        custom(function = "not_blank")

    )]
    pub address_line: String,

    #[validate(length(max = 20, message = "Postal code must not exceed 20 characters"))]
    pub postal_code: Option<String>,

    #[serde(default)]
    pub is_default: bool,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAddressDto {
    #[validate(
        length(min = 1, max = 100, message = "Title must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(

        length(min = 1, max = 100, message = "City must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub city: Option<String>,

    #[validate(

        length(min = 1, max = 100, message = "District must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub district: Option<String>,

    #[validate(

        length(min = 1, max = 500, message = "Address line must be 1-500 characters"),

        custom(function = "not_blank")

    )]
    pub address_line: Option<String>,

    #[validate(length(max = 20, message = "Postal code must not exceed 20 characters"))]
    pub postal_code: Option<String>,

    pub is_default: Option<bool>,

    pub is_active: Option<bool>,
}
