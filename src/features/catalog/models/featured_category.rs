use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Storefront highlight pointing at a category
#[derive(Debug, Clone, FromRow)]
pub struct FeaturedCategory {
    pub id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub image_url: Option<String>,
    pub order_number: i32,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
