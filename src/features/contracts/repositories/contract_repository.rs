use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::contracts::models::Contract;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, title, code, content, version, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Contract code already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContractRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Contract>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contract>>;
    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, contract: &Contract) -> Result<Contract>;
    async fn update(&self, contract: &Contract) -> Result<Contract>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgContractRepository {
    pool: PgPool,
}

impl PgContractRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContractRepository for PgContractRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Contract>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "contracts",
            COLUMNS,
            None,
            &["title", "code"],
            "code ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contract>> {
        let contract = sqlx::query_as::<_, Contract>(&format!(
            "SELECT {} FROM contracts WHERE id = $1",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contract)
    }

    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("contracts")
            .eq("code", code.to_string())
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, contract: &Contract) -> Result<Contract> {
        sqlx::query_as::<_, Contract>(&format!(
            r#"
            INSERT INTO contracts (id, title, code, content, version, is_active, created_at,
                                   created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(contract.id)
        .bind(&contract.title)
        .bind(&contract.code)
        .bind(&contract.content)
        .bind(contract.version)
        .bind(contract.is_active)
        .bind(contract.audit.created_at)
        .bind(contract.audit.created_by)
        .bind(contract.audit.modified_at)
        .bind(contract.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, contract: &Contract) -> Result<Contract> {
        sqlx::query_as::<_, Contract>(&format!(
            r#"
            UPDATE contracts
            SET title = $2, code = $3, content = $4, version = $5, is_active = $6,
                modified_at = $7, modified_by = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(contract.id)
        .bind(&contract.title)
        .bind(&contract.code)
        .bind(&contract.content)
        .bind(contract.version)
        .bind(contract.is_active)
        .bind(contract.audit.modified_at)
        .bind(contract.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Contract with id {} not found", contract.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contracts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
