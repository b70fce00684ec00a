use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Blog post. Unpublished drafts have no `published_at`.
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
