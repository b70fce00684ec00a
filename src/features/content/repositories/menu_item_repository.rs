use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::content::models::MenuItem;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, label, url, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Menu label or order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<MenuItem>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>>;
    /// Case-insensitive
    async fn label_taken(&self, label: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, item: &MenuItem) -> Result<MenuItem>;
    async fn update(&self, item: &MenuItem) -> Result<MenuItem>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<MenuItem>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "menu_items",
            COLUMNS,
            None,
            &["label", "url"],
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {} FROM menu_items WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn label_taken(&self, label: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("menu_items")
            .eq("LOWER(label)", label.to_lowercase())
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("menu_items")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, item: &MenuItem) -> Result<MenuItem> {
        sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            INSERT INTO menu_items (id, label, url, order_number, is_active, created_at,
                                    created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(item.id)
        .bind(&item.label)
        .bind(&item.url)
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

    async fn update(&self, item: &MenuItem) -> Result<MenuItem> {
        sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            UPDATE menu_items
            SET label = $2, url = $3, order_number = $4, is_active = $5,
                modified_at = $6, modified_by = $7
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(item.id)
        .bind(&item.label)
        .bind(&item.url)
        .bind(item.order_number)
        .bind(item.is_active)
        .bind(item.audit.modified_at)
        .bind(item.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Menu item with id {} not found", item.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
