use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

#[derive(Debug, Clone, FromRow)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
