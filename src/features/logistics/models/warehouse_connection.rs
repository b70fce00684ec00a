use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Links a warehouse to a channel it fulfils for. `external_reference` is
/// the warehouse's id on the channel side, when the channel has one.
#[derive(Debug, Clone, FromRow)]
pub struct WarehouseConnection {
    pub id: Uuid,
    pub warehouse_id: Uuid,
    pub channel_id: Uuid,
    pub external_reference: Option<String>,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
