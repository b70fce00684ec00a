use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Child of a [`Category`](super::Category); `order_number` is unique per parent
#[derive(Debug, Clone, FromRow)]
pub struct SubCategory {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
