use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::catalog::models::FeaturedCategory;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, category_id, title, image_url, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Featured category order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeaturedCategoryRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<FeaturedCategory>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FeaturedCategory>>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, featured: &FeaturedCategory) -> Result<FeaturedCategory>;
    async fn update(&self, featured: &FeaturedCategory) -> Result<FeaturedCategory>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgFeaturedCategoryRepository {
    pool: PgPool,
}

impl PgFeaturedCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeaturedCategoryRepository for PgFeaturedCategoryRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<FeaturedCategory>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "featured_categories",
            COLUMNS,
            None,
            &["title"],
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FeaturedCategory>> {
        let featured = sqlx::query_as::<_, FeaturedCategory>(&format!(
            "SELECT {} FROM featured_categories WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(featured)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("featured_categories")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, featured: &FeaturedCategory) -> Result<FeaturedCategory> {
        sqlx::query_as::<_, FeaturedCategory>(&format!(
            r#"
            INSERT INTO featured_categories (id, category_id, title, image_url, order_number,
                                             is_active, created_at, created_by, modified_at,
                                             modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(featured.id)
        .bind(featured.category_id)
        .bind(&featured.title)
        .bind(&featured.image_url)
        .bind(featured.order_number)
        .bind(featured.is_active)
        .bind(featured.audit.created_at)
        .bind(featured.audit.created_by)
        .bind(featured.audit.modified_at)
        .bind(featured.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, featured: &FeaturedCategory) -> Result<FeaturedCategory> {
        sqlx::query_as::<_, FeaturedCategory>(&format!(
            r#"
            UPDATE featured_categories
            SET category_id = $2, title = $3, image_url = $4, order_number = $5, is_active = $6,
                modified_at = $7, modified_by = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(featured.id)
        .bind(featured.category_id)
        .bind(&featured.title)
        .bind(&featured.image_url)
        .bind(featured.order_number)
        .bind(featured.is_active)
        .bind(featured.audit.modified_at)
        .bind(featured.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Featured category with id {} not found",
                featured.id
            ))
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM featured_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
