use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

#[derive(Debug, Clone, FromRow)]
pub struct Warehouse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub city: String,
    pub address: Option<String>,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
