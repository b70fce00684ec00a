use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// A user's acceptance of a contract
#[derive(Debug, Clone, FromRow)]
pub struct UserContract {
    pub id: Uuid,
    pub user_id: Uuid,
    pub contract_id: Uuid,
    pub accepted_at: DateTime<Utc>,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
