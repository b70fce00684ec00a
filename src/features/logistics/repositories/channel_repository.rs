use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::logistics::models::Channel;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, name, code, is_active, created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Channel code already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Channel>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Channel>>;
    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, channel: &Channel) -> Result<Channel>;
    async fn update(&self, channel: &Channel) -> Result<Channel>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Channel>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "channels",
            COLUMNS,
            None,
            &["name", "code"],
            "name ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Channel>> {
        let channel =
            sqlx::query_as::<_, Channel>(&format!("SELECT {} FROM channels WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(channel)
    }

    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("channels")
            .eq("code", code.to_string())
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, channel: &Channel) -> Result<Channel> {
        sqlx::query_as::<_, Channel>(&format!(
            r#"
            INSERT INTO channels (id, name, code, is_active, created_at, created_by,
                                  modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(channel.id)
        .bind(&channel.name)
        .bind(&channel.code)
        .bind(channel.is_active)
        .bind(channel.audit.created_at)
        .bind(channel.audit.created_by)
        .bind(channel.audit.modified_at)
        .bind(channel.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, channel: &Channel) -> Result<Channel> {
        sqlx::query_as::<_, Channel>(&format!(
            r#"
            UPDATE channels
            SET name = $2, code = $3, is_active = $4, modified_at = $5, modified_by = $6
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(channel.id)
        .bind(&channel.name)
        .bind(&channel.code)
        .bind(channel.is_active)
        .bind(channel.audit.modified_at)
        .bind(channel.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Channel with id {} not found", channel.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM channels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
