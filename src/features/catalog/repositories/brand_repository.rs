use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::catalog::models::Brand;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, name, logo_url, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Brand name or order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Brand>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>>;
    /// Case-insensitive
    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, brand: &Brand) -> Result<Brand>;
    async fn update(&self, brand: &Brand) -> Result<Brand>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgBrandRepository {
    pool: PgPool,
}

impl PgBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Brand>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "brands",
            COLUMNS,
            None,
            &["name"],
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Brand>> {
        let brand =
            sqlx::query_as::<_, Brand>(&format!("SELECT {} FROM brands WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(brand)
    }

    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("brands")
            .eq("LOWER(name)", name.to_lowercase())
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("brands")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, brand: &Brand) -> Result<Brand> {
        sqlx::query_as::<_, Brand>(&format!(
            r#"
            INSERT INTO brands (id, name, logo_url, order_number, is_active, created_at,
                                created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(brand.id)
        .bind(&brand.name)
        .bind(&brand.logo_url)
        .bind(brand.order_number)
        .bind(brand.is_active)
        .bind(brand.audit.created_at)
        .bind(brand.audit.created_by)
        .bind(brand.audit.modified_at)
        .bind(brand.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, brand: &Brand) -> Result<Brand> {
        sqlx::query_as::<_, Brand>(&format!(
            r#"
            UPDATE brands
            SET name = $2, logo_url = $3, order_number = $4, is_active = $5,
                modified_at = $6, modified_by = $7
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(brand.id)
        .bind(&brand.name)
        .bind(&brand.logo_url)
        .bind(brand.order_number)
        .bind(brand.is_active)
        .bind(brand.audit.modified_at)
        .bind(brand.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Brand with id {} not found", brand.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM brands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
