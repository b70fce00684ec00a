use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Price range bucket used by storefront filters
#[derive(Debug, Clone, FromRow)]
pub struct Price {
    pub id: Uuid,
    pub label: String,
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
