//! Audit trail columns shared by every persisted entity.
//!
//! The service layer stamps these fields; repositories only persist them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct AuditTrail {
    pub created_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub modified_at: Option<DateTime<Utc>>,
    pub modified_by: Option<Uuid>,
}

impl AuditTrail {
    /// Audit fields for a freshly created record. `actor` is `None` for
    /// anonymous writes such as public contact form submissions.
    pub fn created(actor: Option<Uuid>) -> Self {
        Self {
            created_at: Utc::now(),
            created_by: actor,
            modified_at: None,
            modified_by: None,
        }
    }

    /// Record a modification by `actor`
    pub fn touch(&mut self, actor: Option<Uuid>) {
        self.modified_at = Some(Utc::now());
        self.modified_by = actor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_has_no_modification() {
        let actor = Uuid::now_v7();
        let audit = AuditTrail::created(Some(actor));

        assert_eq!(audit.created_by, Some(actor));
        assert!(audit.modified_at.is_none());
        assert!(audit.modified_by.is_none());
    }

    #[test]
    fn test_touch_keeps_creation_fields() {
        let creator = Uuid::now_v7();
        let editor = Uuid::now_v7();
        let mut audit = AuditTrail::created(Some(creator));
        let created_at = audit.created_at;

        audit.touch(Some(editor));

        assert_eq!(audit.created_at, created_at);
        assert_eq!(audit.created_by, Some(creator));
        assert_eq!(audit.modified_by, Some(editor));
        assert!(audit.modified_at.unwrap() >= created_at);
    }
}
