use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::catalog::models::SubCategory;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, category_id, name, slug, description, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const SEARCH_COLUMNS: &[&str] = &["name", "slug", "description"];
const CONFLICT: &str = "Sub-category slug or order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubCategoryRepository: Send + Sync {
    async fn list_by_category(
        &self,
        category_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<SubCategory>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SubCategory>>;
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool>;
    /// Order numbers are unique within one category
    async fn order_number_taken(
        &self,
        category_id: Uuid,
        order_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool>;
    async fn insert(&self, sub_category: &SubCategory) -> Result<SubCategory>;
    async fn update(&self, sub_category: &SubCategory) -> Result<SubCategory>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgSubCategoryRepository {
    pool: PgPool,
}

impl PgSubCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubCategoryRepository for PgSubCategoryRepository {
    async fn list_by_category(
        &self,
        category_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<SubCategory>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "sub_categories",
            COLUMNS,
            Some(("category_id", category_id)),
            SEARCH_COLUMNS,
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SubCategory>> {
        let sub_category = sqlx::query_as::<_, SubCategory>(&format!(
            "SELECT {} FROM sub_categories WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sub_category)
    }

    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("sub_categories")
            .eq("slug", slug)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn order_number_taken(
        &self,
        category_id: Uuid,
        order_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool> {
        Ok(ExistsQuery::new("sub_categories")
            .eq("category_id", category_id)
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, sub_category: &SubCategory) -> Result<SubCategory> {
        sqlx::query_as::<_, SubCategory>(&format!(
            r#"
            INSERT INTO sub_categories (id, category_id, name, slug, description, order_number,
                                        is_active, created_at, created_by, modified_at,
                                        modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(sub_category.id)
        .bind(sub_category.category_id)
        .bind(&sub_category.name)
        .bind(&sub_category.slug)
        .bind(&sub_category.description)
        .bind(sub_category.order_number)
        .bind(sub_category.is_active)
        .bind(sub_category.audit.created_at)
        .bind(sub_category.audit.created_by)
        .bind(sub_category.audit.modified_at)
        .bind(sub_category.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, sub_category: &SubCategory) -> Result<SubCategory> {
        sqlx::query_as::<_, SubCategory>(&format!(
            r#"
            UPDATE sub_categories
            SET category_id = $2, name = $3, slug = $4, description = $5, order_number = $6,
                is_active = $7, modified_at = $8, modified_by = $9
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(sub_category.id)
        .bind(sub_category.category_id)
        .bind(&sub_category.name)
        .bind(&sub_category.slug)
        .bind(&sub_category.description)
        .bind(sub_category.order_number)
        .bind(sub_category.is_active)
        .bind(sub_category.audit.modified_at)
        .bind(sub_category.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Sub-category with id {} not found",
                sub_category.id
            ))
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sub_categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
