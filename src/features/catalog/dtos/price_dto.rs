use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::catalog::models::Price;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriceResponseDto {
    pub id: Uuid,
    pub label: String,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Price> for PriceResponseDto {
    fn from(p: Price) -> Self {
        Self {
            id: p.id,
            label: p.label,
            min_amount: p.min_amount,
            max_amount: p.max_amount,
            order_number: p.order_number,
            is_active: p.is_active,
            audit: p.audit,
        }
    }
}

/// Amounts accept JSON numbers or decimal strings
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePriceDto {
    #[validate(
        length(min = 1, max = 100, message = "Label must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub label: String,

    pub min_amount: Decimal,

    pub max_amount: Decimal,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePriceDto {
    #[validate(
        length(min = 1, max = 100, message = "Label must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub label: Option<String>,

    pub min_amount: Option<Decimal>,

    pub max_amount: Option<Decimal>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
