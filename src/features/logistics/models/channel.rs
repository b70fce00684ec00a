use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Sales channel (web shop, marketplace, store counter)
#[derive(Debug, Clone, FromRow)]
pub struct Channel {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
