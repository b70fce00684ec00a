use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::users::models::User;
use crate::shared::query::{push_list_filters, push_page};
use crate::shared::types::ListQuery;

const SEARCH_COLUMNS: &[&str] = &["email", "first_name", "last_name", "phone"];

/// Persistence for accounts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<User>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn count(&self) -> Result<i64>;
    async fn insert(&self, user: &User) -> Result<User>;
    async fn update(&self, user: &User) -> Result<User>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<User>, i64)> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM users WHERE 1=1");
        push_list_filters(&mut count, query, SEARCH_COLUMNS);
        let total: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count users: {:?}", e);
                AppError::Database(e)
            })?;

        let mut select = QueryBuilder::<Postgres>::new(
            r#"
            SELECT id, email, first_name, last_name, phone, password_hash, role, is_active,
                   created_at, created_by, modified_at, modified_by
            FROM users
            WHERE 1=1
            "#,
        );
        push_list_filters(&mut select, query, SEARCH_COLUMNS);
        push_page(&mut select, "created_at DESC", query);
        let users = select
            .build_query_as::<User>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((users, total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, phone, password_hash, role, is_active,
                   created_at, created_by, modified_at, modified_by
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, first_name, last_name, phone, password_hash, role, is_active,
                   created_at, created_by, modified_at, modified_by
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool> {
        let taken: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE LOWER(email) = LOWER($1) AND ($2::uuid IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn count(&self) -> Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn insert(&self, user: &User) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, first_name, last_name, phone, password_hash, role,
                               is_active, created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, email, first_name, last_name, phone, password_hash, role, is_active,
                      created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(user.is_active)
        .bind(user.audit.created_at)
        .bind(user.audit.created_by)
        .bind(user.audit.modified_at)
        .bind(user.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "A user with this email already exists"))
    }

    async fn update(&self, user: &User) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = $2,
                first_name = $3,
                last_name = $4,
                phone = $5,
                password_hash = $6,
                role = $7,
                is_active = $8,
                modified_at = $9,
                modified_by = $10
            WHERE id = $1
            RETURNING id, email, first_name, last_name, phone, password_hash, role, is_active,
                      created_at, created_by, modified_at, modified_by
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(&user.role)
        .bind(user.is_active)
        .bind(user.audit.modified_at)
        .bind(user.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "A user with this email already exists"))?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
