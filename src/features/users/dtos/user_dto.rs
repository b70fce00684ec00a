use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::users::models::User;
use crate::shared::constants::ROLES;
use crate::shared::validation::{PHONE_REGEX, not_blank};

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if ROLES.contains(&role) {
        Ok(())
    } else {
        let mut error = ValidationError::new("role");
        error.message = Some(format!("Role must be one of: {}", ROLES.join(", ")).into());
        Err(error)
    }
}

/// Account as returned by the API. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            full_name: u.full_name(),
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            phone: u.phone,
            role: u.role,
            is_active: u.is_active,
            created_at: u.audit.created_at,
            created_by: u.audit.created_by,
            modified_at: u.audit.modified_at,
            modified_by: u.audit.modified_by,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(

        length(min = 1, max = 100, message = "First name must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub first_name: String,

    #[validate(

        length(min = 1, max = 100, message = "Last name must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub last_name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be 7-15 digits, optionally prefixed with +"))]
    pub phone: Option<String>,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(custom(function = "validate_role"))]
    pub role: String,

    pub is_active: Option<bool>,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(

        length(min = 1, max = 100, message = "First name must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub first_name: Option<String>,

    #[validate(

        length(min = 1, max = 100, message = "Last name must be 1-100 characters"),

        custom(function = "not_blank")

    )]
    pub last_name: Option<String>,

    #[validate(regex(path = *PHONE_REGEX, message = "Phone must be 7-15 digits, optionally prefixed with +"))]
    pub phone: Option<String>,

    /// New password, hashed before storing
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: Option<String>,

    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::audit::AuditTrail;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;

    fn valid_create() -> CreateUserDto {
        CreateUserDto {
            email: SafeEmail().fake(),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            phone: Some("+905551112233".to_string()),
            password: "long-enough-password".to_string(),
            role: "editor".to_string(),
            is_active: None,
        }
    }

    #[test]
    fn test_create_user_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_unknown_role() {
        let dto = CreateUserDto {
            role: "superuser".to_string(),
            ..valid_create()
        };
        let err = dto.validate().unwrap_err();
        assert!(err.field_errors().contains_key("role"));
    }

    #[test]
    fn test_create_user_rejects_short_password_and_bad_phone() {
        let dto = CreateUserDto {
            password: "short".to_string(),
            phone: Some("555-111".to_string()),
            ..valid_create()
        };
        let err = dto.validate().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_update_user_empty_is_valid() {
        assert!(UpdateUserDto::default().validate().is_ok());
    }

    #[test]
    fn test_response_never_has_password_hash() {
        let user = User {
            id: Uuid::now_v7(),
            email: "a@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: None,
            password_hash: "$pbkdf2-sha256$secret".to_string(),
            role: "admin".to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        };

        let json = serde_json::to_string(&UserResponseDto::from(user)).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"full_name\":\"Ada Lovelace\""));
    }
}
