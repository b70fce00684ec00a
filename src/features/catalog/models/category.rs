use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Top-level catalog grouping, ordered by `order_number`
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
