use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub logo_url: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
