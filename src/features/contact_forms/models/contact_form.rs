use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::audit::AuditTrail;

/// Message sent from the storefront contact page.
/// `audit.created_by` is empty for anonymous submissions.
#[derive(Debug, Clone, FromRow)]
pub struct ContactForm {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub is_active: bool,
    #[sqlx(flatten)]
    pub audit: AuditTrail,
}
