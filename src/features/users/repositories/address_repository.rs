use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::users::models::Address;
use crate::shared::query::{push_list_filters, push_page};
use crate::shared::types::ListQuery;

const SEARCH_COLUMNS: &[&str] = &["title", "city", "district", "address_line"];

/// Persistence for user addresses
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn list_by_user(&self, user_id: Uuid, query: &ListQuery) -> Result<(Vec<Address>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>>;
    async fn insert(&self, address: &Address) -> Result<Address>;
    async fn update(&self, address: &Address) -> Result<Address>;
    /// Clear `is_default` on every address of `user_id` except `keep`
    async fn clear_default(&self, user_id: Uuid, keep: Uuid, actor: Option<Uuid>) -> Result<u64>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgAddressRepository {
    pool: PgPool,
}

impl PgAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn list_by_user(&self, user_id: Uuid, query: &ListQuery) -> Result<(Vec<Address>, i64)> {
        let mut count =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM addresses WHERE user_id = ");
        count.push_bind(user_id);
        push_list_filters(&mut count, query, SEARCH_COLUMNS);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let mut select = QueryBuilder::<Postgres>::new(
            r#"
            SELECT id, user_id, title, city, district, address_line, postal_code, is_default,
                   is_active, created_at, created_by, modified_at, modified_by
            FROM addresses
            WHERE user_id = "#,
        );
        select.push_bind(user_id);
        push_list_filters(&mut select, query, SEARCH_COLUMNS);
        push_page(&mut select, "is_default DESC, created_at DESC", query);
        let addresses = select
            .build_query_as::<Address>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list addresses for user {}: {:?}", user_id, e);
                AppError::Database(e)
            })?;

        Ok((addresses, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, user_id, title, city, district, address_line, postal_code, is_default,
                   is_active, created_at, created_by, modified_at, modified_by
            FROM addresses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(address)
    }

    async fn insert(&self, address: &Address) -> Result<Address> {
        sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (id, user_id, title, city, district, address_line, postal_code,
                                   is_default, is_active, created_at, created_by, modified_at,
                                   modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, user_id, title, city, district, address_line, postal_code, is_default,
                      is_active, created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(address.id)
        .bind(address.user_id)
        .bind(&address.title)
        .bind(&address.city)
        .bind(&address.district)
        .bind(&address.address_line)
        .bind(&address.postal_code)
        .bind(address.is_default)
        .bind(address.is_active)
        .bind(address.audit.created_at)
        .bind(address.audit.created_by)
        .bind(address.audit.modified_at)
        .bind(address.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Address already exists"))
    }

    async fn update(&self, address: &Address) -> Result<Address> {
        sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses
            SET title = $2,
                city = $3,
                district = $4,
                address_line = $5,
                postal_code = $6,
                is_default = $7,
                is_active = $8,
                modified_at = $9,
                modified_by = $10
            WHERE id = $1
            RETURNING id, user_id, title, city, district, address_line, postal_code, is_default,
                      is_active, created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(address.id)
        .bind(&address.title)
        .bind(&address.city)
        .bind(&address.district)
        .bind(&address.address_line)
        .bind(&address.postal_code)
        .bind(address.is_default)
        .bind(address.is_active)
        .bind(address.audit.modified_at)
        .bind(address.audit.modified_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Address with id {} not found", address.id)))
    }

    async fn clear_default(&self, user_id: Uuid, keep: Uuid, actor: Option<Uuid>) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE addresses
            SET is_default = FALSE, modified_at = NOW(), modified_by = $3
            WHERE user_id = $1 AND id <> $2 AND is_default = TRUE
            "#,
        )
        .bind(user_id)
        .bind(keep)
        .bind(actor)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
