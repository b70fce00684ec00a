use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Legal document users accept (rental terms, privacy notice, ...).
/// `version` starts at 1 and increases whenever `content` changes.
#[derive(Debug, Clone, FromRow)]
pub struct Contract {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub content: String,
    pub version: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
