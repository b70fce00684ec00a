use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::catalog::models::Price;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, label, min_amount, max_amount, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Price label or order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PriceRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Price>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Price>>;
    /// Case-insensitive
    async fn label_taken(&self, label: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, price: &Price) -> Result<Price>;
    async fn update(&self, price: &Price) -> Result<Price>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgPriceRepository {
    pool: PgPool,
}

impl PgPriceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceRepository for PgPriceRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Price>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "prices",
            COLUMNS,
            None,
            &["label"],
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Price>> {
        let price =
            sqlx::query_as::<_, Price>(&format!("SELECT {} FROM prices WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(price)
    }

    async fn label_taken(&self, label: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("prices")
            .eq("LOWER(label)", label.to_lowercase())
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("prices")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, price: &Price) -> Result<Price> {
        sqlx::query_as::<_, Price>(&format!(
            r#"
            INSERT INTO prices (id, label, min_amount, max_amount, order_number, is_active,
                                created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(price.id)
        .bind(&price.label)
        .bind(price.min_amount)
        .bind(price.max_amount)
        .bind(price.order_number)
        .bind(price.is_active)
        .bind(price.audit.created_at)
        .bind(price.audit.created_by)
        .bind(price.audit.modified_at)
        .bind(price.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, price: &Price) -> Result<Price> {
        sqlx::query_as::<_, Price>(&format!(
            r#"
            UPDATE prices
            SET label = $2, min_amount = $3, max_amount = $4, order_number = $5, is_active = $6,
                modified_at = $7, modified_by = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(price.id)
        .bind(&price.label)
        .bind(price.min_amount)
        .bind(price.max_amount)
        .bind(price.order_number)
        .bind(price.is_active)
        .bind(price.audit.modified_at)
        .bind(price.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Price with id {} not found", price.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM prices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
