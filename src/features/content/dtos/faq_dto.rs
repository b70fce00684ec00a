use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::content::models::Faq;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FaqResponseDto {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Faq> for FaqResponseDto {
    fn from(f: Faq) -> Self {
        Self {
            id: f.id,
            question: f.question,
            answer: f.answer,
            order_number: f.order_number,
            is_active: f.is_active,
            audit: f.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFaqDto {
    #[validate(
        length(min = 1, max = 500, message = "Question must be 1-500 characters"),
        custom(function = "not_blank")
    )]
    pub question: String,

    #[validate(

        length(min = 1, max = 5000, message = "Answer must be 1-5000 characters"),

        custom(function = "not_blank")

    )]
    pub answer: String,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFaqDto {
    #[validate(
        length(min = 1, max = 500, message = "Question must be 1-500 characters"),
        custom(function = "not_blank")
    )]
    pub question: Option<String>,

    #[validate(

        length(min = 1, max = 5000, message = "Answer must be 1-5000 characters"),

        custom(function = "not_blank")

    )]
    pub answer: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}
