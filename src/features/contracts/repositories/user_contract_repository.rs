use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::contracts::models::UserContract;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, user_id, contract_id, accepted_at, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "User has already accepted this contract";

/// Contract acceptances, one row per (user, contract)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserContractRepository: Send + Sync {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<UserContract>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserContract>>;
    async fn exists_for(
        &self,
        user_id: Uuid,
        contract_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<bool>;
    async fn insert(&self, user_contract: &UserContract) -> Result<UserContract>;
    async fn update(&self, user_contract: &UserContract) -> Result<UserContract>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgUserContractRepository {
    pool: PgPool,
}

impl PgUserContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserContractRepository for PgUserContractRepository {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<UserContract>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "user_contracts",
            COLUMNS,
            Some(("user_id", user_id)),
            &[],
            "accepted_at DESC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserContract>> {
        let row = sqlx::query_as::<_, UserContract>(&format!(
            "SELECT {} FROM user_contracts WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn exists_for(
        &self,
        user_id: Uuid,
        contract_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<bool> {
        Ok(ExistsQuery::new("user_contracts")
            .eq("user_id", user_id)
            .eq("contract_id", contract_id)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, user_contract: &UserContract) -> Result<UserContract> {
        sqlx::query_as::<_, UserContract>(&format!(
            r#"
            INSERT INTO user_contracts (id, user_id, contract_id, accepted_at, is_active,
                                        created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(user_contract.id)
        .bind(user_contract.user_id)
        .bind(user_contract.contract_id)
        .bind(user_contract.accepted_at)
        .bind(user_contract.is_active)
        .bind(user_contract.audit.created_at)
        .bind(user_contract.audit.created_by)
        .bind(user_contract.audit.modified_at)
        .bind(user_contract.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, user_contract: &UserContract) -> Result<UserContract> {
        sqlx::query_as::<_, UserContract>(&format!(
            r#"
            UPDATE user_contracts
            SET contract_id = $2, accepted_at = $3, is_active = $4,
                modified_at = $5, modified_by = $6
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(user_contract.id)
        .bind(user_contract.contract_id)
        .bind(user_contract.accepted_at)
        .bind(user_contract.is_active)
        .bind(user_contract.audit.modified_at)
        .bind(user_contract.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "User contract with id {} not found",
                user_contract.id
            ))
        })
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM user_contracts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
