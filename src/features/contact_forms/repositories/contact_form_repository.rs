use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::contact_forms::models::ContactForm;
use crate::shared::query::fetch_page;
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, full_name, email, phone, subject, message, is_read, is_active, \
                       created_at, created_by, modified_at, modified_by";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactFormRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<ContactForm>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactForm>>;
    async fn insert(&self, form: &ContactForm) -> Result<ContactForm>;
    async fn update(&self, form: &ContactForm) -> Result<ContactForm>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgContactFormRepository {
    pool: PgPool,
}

impl PgContactFormRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactFormRepository for PgContactFormRepository {
    /// Unread first, then newest
    async fn list(&self, query: &ListQuery) -> Result<(Vec<ContactForm>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "contact_forms",
            COLUMNS,
            None,
            &["full_name", "email", "subject"],
            "is_read ASC, created_at DESC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactForm>> {
        let form = sqlx::query_as::<_, ContactForm>(&format!(
            "SELECT {} FROM contact_forms WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(form)
    }

    async fn insert(&self, form: &ContactForm) -> Result<ContactForm> {
        let created = sqlx::query_as::<_, ContactForm>(&format!(
            r#"
            INSERT INTO contact_forms (id, full_name, email, phone, subject, message, is_read,
                                       is_active, created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(form.id)
        .bind(&form.full_name)
        .bind(&form.email)
        .bind(&form.phone)
        .bind(&form.subject)
        .bind(&form.message)
        .bind(form.is_read)
        .bind(form.is_active)
        .bind(form.audit.created_at)
        .bind(form.audit.created_by)
        .bind(form.audit.modified_at)
        .bind(form.audit.modified_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, form: &ContactForm) -> Result<ContactForm> {
        sqlx::query_as::<_, ContactForm>(&format!(
            r#"
            UPDATE contact_forms
            SET is_read = $2, is_active = $3, modified_at = $4, modified_by = $5
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(form.id)
        .bind(form.is_read)
        .bind(form.is_active)
        .bind(form.audit.modified_at)
        .bind(form.audit.modified_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Contact form with id {} not found", form.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contact_forms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
