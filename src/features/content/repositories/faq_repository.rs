use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::content::models::Faq;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, question, answer, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "FAQ order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Faq>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Faq>>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, faq: &Faq) -> Result<Faq>;
    async fn update(&self, faq: &Faq) -> Result<Faq>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgFaqRepository {
    pool: PgPool,
}

impl PgFaqRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqRepository for PgFaqRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Faq>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "faqs",
            COLUMNS,
            None,
            &["question", "answer"],
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Faq>> {
        let faq = sqlx::query_as::<_, Faq>(&format!("SELECT {} FROM faqs WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(faq)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("faqs")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, faq: &Faq) -> Result<Faq> {
        sqlx::query_as::<_, Faq>(&format!(
            r#"
            INSERT INTO faqs (id, question, answer, order_number, is_active, created_at,
                              created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(faq.id)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(faq.order_number)
        .bind(faq.is_active)
        .bind(faq.audit.created_at)
        .bind(faq.audit.created_by)
        .bind(faq.audit.modified_at)
        .bind(faq.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, faq: &Faq) -> Result<Faq> {
        sqlx::query_as::<_, Faq>(&format!(
            r#"
            UPDATE faqs
            SET question = $2, answer = $3, order_number = $4, is_active = $5,
                modified_at = $6, modified_by = $7
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(faq.id)
        .bind(&faq.question)
        .bind(&faq.answer)
        .bind(faq.order_number)
        .bind(faq.is_active)
        .bind(faq.audit.modified_at)
        .bind(faq.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("FAQ with id {} not found", faq.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
