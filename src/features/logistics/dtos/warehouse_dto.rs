use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::logistics::models::Warehouse;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::{CODE_REGEX, not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WarehouseResponseDto {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub city: String,
    pub address: Option<String>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Warehouse> for WarehouseResponseDto {
    fn from(w: Warehouse) -> Self {
        Self {
            id: w.id,
            name: w.name,
            code: w.code,
            city: w.city,
            address: w.address,
            is_active: w.is_active,
            audit: w.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWarehouseDto {
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

    #[validate(

        length(min = 1, max = 100, message = "City must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub city: String,

    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    pub address: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWarehouseDto {
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

    #[validate(

        length(min = 1, max = 100, message = "City must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub city: Option<String>,

    #[validate(length(max = 500, message = "Address must not exceed 500 characters"))]
    pub address: Option<String>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_code_rejected() {
        let dto = CreateWarehouseDto {
            name: "Istanbul depot".to_string(),
            code: "ist-01".to_string(),
            city: "Istanbul".to_string(),
            address: None,
            is_active: None,
        };

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("code"));
    }

    #[test]
    fn test_overlong_code_rejected() {
        let dto = UpdateWarehouseDto {
            code: Some("A".repeat(51)),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
