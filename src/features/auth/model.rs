use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::constants::{ROLE_ADMIN, ROLE_EDITOR};

/// Identity of the caller, decoded from a validated access token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user is admin
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }

    /// Check if user is editor
    pub fn is_editor(&self) -> bool {
        self.has_role(ROLE_EDITOR)
    }

    /// Check if user can manage catalog and content (admin or editor)
    pub fn has_editor_access(&self) -> bool {
        self.is_admin() || self.is_editor()
    }

    /// Actor id recorded in audit trails
    pub fn actor(&self) -> Option<Uuid> {
        Some(self.user_id)
    }
}

/// JWT claims issued by this service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
    pub jti: String,
}
