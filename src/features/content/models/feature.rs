use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Selling point shown on the storefront ("Free delivery", ...)
#[derive(Debug, Clone, FromRow)]
pub struct Feature {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
