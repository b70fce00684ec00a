use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::catalog::models::Category;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::{SLUG_REGEX, not_blank};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
            description: c.description,
            image_url: c.image_url,
            order_number: c.order_number,
            is_active: c.is_active,
            audit: c.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase letters, digits and single hyphens"))]
    pub slug: String,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: i32,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase letters, digits and single hyphens"))]
    pub slug: Option<String>,

    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Order number must not be negative"))]
    pub order_number: Option<i32>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateCategoryDto {
        CreateCategoryDto {
            name: "Living Room".to_string(),
            slug: "living-room".to_string(),
            description: None,
            image_url: Some("https://cdn.example.com/living.png".to_string()),
            order_number: 1,
            is_active: None,
        }
    }

    #[test]
    fn test_valid_category() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_slug_url_and_negative_order() {
        let dto = CreateCategoryDto {
            slug: "Living Room".to_string(),
            image_url: Some("not a url".to_string()),
            order_number: -1,
            ..valid()
        };
        let err = dto.validate().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.contains_key("slug"));
        assert!(fields.contains_key("image_url"));
        assert!(fields.contains_key("order_number"));
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let dto = CreateCategoryDto {
            name: "   ".to_string(),
            ..valid()
        };
        let err = dto.validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));

        let update = UpdateCategoryDto {
            name: Some("\t ".to_string()),
            ..Default::default()
        };
        let err = update.validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
    }
}
