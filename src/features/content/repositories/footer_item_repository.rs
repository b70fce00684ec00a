use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::content::models::FooterItem;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, title, url, column_name, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Order number already in use in this footer column";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FooterItemRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<FooterItem>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FooterItem>>;
    /// Order numbers are unique per `column_name`
    async fn order_number_taken(
        &self,
        column_name: &str,
        order_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool>;
    async fn insert(&self, item: &FooterItem) -> Result<FooterItem>;
    async fn update(&self, item: &FooterItem) -> Result<FooterItem>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgFooterItemRepository {
    pool: PgPool,
}

impl PgFooterItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FooterItemRepository for PgFooterItemRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<FooterItem>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "footer_items",
            COLUMNS,
            None,
            &["title", "column_name", "url"],
            "column_name ASC, order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FooterItem>> {
        let item = sqlx::query_as::<_, FooterItem>(&format!(
            "SELECT {} FROM footer_items WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn order_number_taken(
        &self,
        column_name: &str,
        order_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool> {
        Ok(ExistsQuery::new("footer_items")
            .eq("column_name", column_name.to_string())
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, item: &FooterItem) -> Result<FooterItem> {
        sqlx::query_as::<_, FooterItem>(&format!(
            r#"
            INSERT INTO footer_items (id, title, url, column_name, order_number, is_active,
                                      created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(item.id)
        .bind(&item.title)
        .bind(&item.url)
        .bind(&item.column_name)
        .bind(item.order_number)
        .bind(item.is_active)
        .bind(item.audit.created_at)
        .bind(item.audit.created_by)
        .bind(item.audit.modified_at)
        .bind(item.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, item: &FooterItem) -> Result<FooterItem> {
        sqlx::query_as::<_, FooterItem>(&format!(
            r#"
            UPDATE footer_items
            SET title = $2, url = $3, column_name = $4, order_number = $5, is_active = $6,
                modified_at = $7, modified_by = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(item.id)
        .bind(&item.title)
        .bind(&item.url)
        .bind(&item.column_name)
        .bind(item.order_number)
        .bind(item.is_active)
        .bind(item.audit.modified_at)
        .bind(item.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Footer item with id {} not found", item.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM footer_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
