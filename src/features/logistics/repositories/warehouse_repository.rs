use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::logistics::models::Warehouse;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, name, code, city, address, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Warehouse code already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Warehouse>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Warehouse>>;
    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, warehouse: &Warehouse) -> Result<Warehouse>;
    async fn update(&self, warehouse: &Warehouse) -> Result<Warehouse>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgWarehouseRepository {
    pool: PgPool,
}

impl PgWarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for PgWarehouseRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Warehouse>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "warehouses",
            COLUMNS,
            None,
            &["name", "code", "city"],
            "name ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Warehouse>> {
        let warehouse = sqlx::query_as::<_, Warehouse>(&format!(
            "SELECT {} FROM warehouses WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(warehouse)
    }

    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("warehouses")
            .eq("code", code.to_string())
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, warehouse: &Warehouse) -> Result<Warehouse> {
        sqlx::query_as::<_, Warehouse>(&format!(
            r#"
            INSERT INTO warehouses (id, name, code, city, address, is_active, created_at,
                                    created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(warehouse.id)
        .bind(&warehouse.name)
        .bind(&warehouse.code)
        .bind(&warehouse.city)
        .bind(&warehouse.address)
        .bind(warehouse.is_active)
        .bind(warehouse.audit.created_at)
        .bind(warehouse.audit.created_by)
        .bind(warehouse.audit.modified_at)
        .bind(warehouse.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, warehouse: &Warehouse) -> Result<Warehouse> {
        sqlx::query_as::<_, Warehouse>(&format!(
            r#"
            UPDATE warehouses
            SET name = $2, code = $3, city = $4, address = $5, is_active = $6,
                modified_at = $7, modified_by = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(warehouse.id)
        .bind(&warehouse.name)
        .bind(&warehouse.code)
        .bind(&warehouse.city)
        .bind(&warehouse.address)
        .bind(warehouse.is_active)
        .bind(warehouse.audit.modified_at)
        .bind(warehouse.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Warehouse with id {} not found", warehouse.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
