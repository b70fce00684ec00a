use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Footer link, grouped by `column_name` and ordered within its column
#[derive(Debug, Clone, FromRow)]
pub struct FooterItem {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub column_name: String,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
