use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::content::models::Blog;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::{SLUG_REGEX, not_blank};

/// Response DTO for blog post
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogResponseDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<Blog> for BlogResponseDto {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            slug: b.slug,
            summary: b.summary,
            content: b.content,
            cover_image_url: b.cover_image_url,
            published_at: b.published_at,
            is_active: b.is_active,
            audit: b.audit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBlogDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: String,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase letters, digits and single hyphens"))]
    pub slug: String,

    #[validate(length(max = 500, message = "Summary must not exceed 500 characters"))]
    pub summary: Option<String>,

    #[validate(

        length(min = 1, message = "Content is required"),

        custom(function = "not_blank")

    )]
    pub content: String,

    #[validate(url(message = "Cover image URL must be a valid URL"))]
    pub cover_image_url: Option<String>,

    /// Leave empty to keep the post as a draft
    pub published_at: Option<DateTime<Utc>>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBlogDto {
    #[validate(
        length(min = 1, max = 200, message = "Title must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub title: Option<String>,

    #[validate(regex(path = *SLUG_REGEX, message = "Slug must be lowercase letters, digits and single hyphens"))]
    pub slug: Option<String>,

    #[validate(length(max = 500, message = "Summary must not exceed 500 characters"))]
    pub summary: Option<String>,

    #[validate(

        length(min = 1, message = "Content must not be empty"),

        custom(function = "not_blank")

    )]
    pub content: Option<String>,

    #[validate(url(message = "Cover image URL must be a valid URL"))]
    pub cover_image_url: Option<String>,

    pub published_at: Option<DateTime<Utc>>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateBlogDto {
        CreateBlogDto {
            title: "Renting a camera for your trip".to_string(),
            slug: "renting-a-camera".to_string(),
            summary: None,
            content: "Pick a lens first.".to_string(),
            cover_image_url: None,
            published_at: None,
            is_active: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_content_rejected() {
        let dto = CreateBlogDto {
            content: String::new(),
            ..valid()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_published_at_parses_rfc3339() {
        let dto: CreateBlogDto = serde_json::from_value(serde_json::json!({
            "title": "Spring sale",
            "slug": "spring-sale",
            "content": "Everything is 20% off.",
            "published_at": "2024-03-01T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            dto.published_at.map(|d| d.to_rfc3339()),
            Some("2024-03-01T09:00:00+00:00".to_string())
        );
    }
}
