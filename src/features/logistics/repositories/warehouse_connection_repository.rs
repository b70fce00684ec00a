use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::logistics::models::WarehouseConnection;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, warehouse_id, channel_id, external_reference, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Warehouse is already connected to this channel";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarehouseConnectionRepository: Send + Sync {
    async fn list_by_warehouse(
        &self,
        warehouse_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<WarehouseConnection>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<WarehouseConnection>>;
    async fn pair_taken(
        &self,
        warehouse_id: Uuid,
        channel_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<bool>;
    async fn insert(&self, connection: &WarehouseConnection) -> Result<WarehouseConnection>;
    async fn update(&self, connection: &WarehouseConnection) -> Result<WarehouseConnection>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgWarehouseConnectionRepository {
    pool: PgPool,
}

impl PgWarehouseConnectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseConnectionRepository for PgWarehouseConnectionRepository {
    async fn list_by_warehouse(
        &self,
        warehouse_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<WarehouseConnection>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "warehouse_connections",
            COLUMNS,
            Some(("warehouse_id", warehouse_id)),
            &["external_reference"],
            "created_at ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WarehouseConnection>> {
        let connection = sqlx::query_as::<_, WarehouseConnection>(&format!(
            "SELECT {} FROM warehouse_connections WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(connection)
    }

    async fn pair_taken(
        &self,
        warehouse_id: Uuid,
        channel_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<bool> {
        Ok(ExistsQuery::new("warehouse_connections")
            .eq("warehouse_id", warehouse_id)
            .eq("channel_id", channel_id)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, connection: &WarehouseConnection) -> Result<WarehouseConnection> {
        sqlx::query_as::<_, WarehouseConnection>(&format!(
            r#"
            INSERT INTO warehouse_connections (id, warehouse_id, channel_id, external_reference,
                                               is_active, created_at, created_by, modified_at,
                                               modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(connection.id)
        .bind(connection.warehouse_id)
        .bind(connection.channel_id)
        .bind(&connection.external_reference)
        .bind(connection.is_active)
        .bind(connection.audit.created_at)
        .bind(connection.audit.created_by)
        .bind(connection.audit.modified_at)
        .bind(connection.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, connection: &WarehouseConnection) -> Result<WarehouseConnection> {
        sqlx::query_as::<_, WarehouseConnection>(&format!(
            r#"
            UPDATE warehouse_connections
            SET channel_id = $2, external_reference = $3, is_active = $4,
                modified_at = $5, modified_by = $6
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(connection.id)
        .bind(connection.channel_id)
        .bind(&connection.external_reference)
        .bind(connection.is_active)
        .bind(connection.audit.modified_at)
        .bind(connection.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Warehouse connection with id {} not found",
                connection.id
            ))
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM warehouse_connections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
