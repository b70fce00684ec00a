use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::catalog::models::Category;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, name, slug, description, image_url, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const SEARCH_COLUMNS: &[&str] = &["name", "slug", "description"];

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Category>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>>;
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, category: &Category) -> Result<Category>;
    async fn update(&self, category: &Category) -> Result<Category>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Category>, i64)> {
        fetch_page(
            &self.pool,
            "categories",
            COLUMNS,
            None,
            SEARCH_COLUMNS,
            "order_number ASC",
            query,
        )
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {} FROM categories WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("categories")
            .eq("slug", slug)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("categories")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, category: &Category) -> Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            r#"
            INSERT INTO categories (id, name, slug, description, image_url, order_number,
                                    is_active, created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(&category.image_url)
        .bind(category.order_number)
        .bind(category.is_active)
        .bind(category.audit.created_at)
        .bind(category.audit.created_by)
        .bind(category.audit.modified_at)
        .bind(category.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Category slug or order number already in use"))
    }

    async fn update(&self, category: &Category) -> Result<Category> {
        sqlx::query_as::<_, Category>(&format!(
            r#"
            UPDATE categories
            SET name = $2, slug = $3, description = $4, image_url = $5, order_number = $6,
                is_active = $7, modified_at = $8, modified_by = $9
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .bind(&category.image_url)
        .bind(category.order_number)
        .bind(category.is_active)
        .bind(category.audit.modified_at)
        .bind(category.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Category slug or order number already in use"))?
        .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", category.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
