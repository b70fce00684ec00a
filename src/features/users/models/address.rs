use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Database model for a user's delivery/billing address
#[derive(Debug, Clone, FromRow)]
pub struct Address {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub city: String,
    pub district: String,
    pub address_line: String,
    pub postal_code: Option<String>,
    pub is_default: bool,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
