use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::contact_forms::models::ContactForm;
use crate::shared::audit::AuditTrail;
use crate::shared::validation::{PHONE_REGEX, not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactFormResponseDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub is_active: bool,
    #[serde(flatten)]
    pub audit: AuditTrail,
}

impl From<ContactForm> for ContactFormResponseDto {
    fn from(f: ContactForm) -> Self {
        Self {
            id: f.id,
            full_name: f.full_name,
            email: f.email,
            phone: f.phone,
            subject: f.subject,
            message: f.message,
            is_read: f.is_read,
            is_active: f.is_active,
            audit: f.audit,
        }
    }
}

/// Public submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactFormDto {
    #[validate(
        length(min = 1, max = 150, message = "Full name must be 1-150 characters"),
        custom(function = "not_blank")
    )]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be 7-15 digits, optionally starting with '+'"))]
    pub phone: Option<String>,

    #[validate(

        length(min = 1, max = 200, message = "Subject must be 1-200 characters"),

        custom(function = "not_blank")

    )]
    pub subject: String,

    #[validate(

        length(min = 1, max = 5000, message = "Message must be 1-5000 characters"),

        custom(function = "not_blank")

    )]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkContactFormReadDto {
    pub is_read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid() -> CreateContactFormDto {
        CreateContactFormDto {
            full_name: Name().fake(),
            email: SafeEmail().fake(),
            phone: None,
            subject: "Availability".to_string(),
            message: "Is the 70-200mm lens free next weekend?".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_bad_email_and_phone() {
        let dto = CreateContactFormDto {
            email: "nope".to_string(),
            phone: Some("call me".to_string()),
            ..valid()
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_blank_name_and_subject() {
        let dto = CreateContactFormDto {
            full_name: "  ".to_string(),
            subject: " ".to_string(),
            ..valid()
        };

        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("full_name"));
        assert!(fields.contains_key("subject"));
    }
}
