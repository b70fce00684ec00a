use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::content::models::Feature;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, title, description, icon, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Feature order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeatureRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Feature>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Feature>>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, feature: &Feature) -> Result<Feature>;
    async fn update(&self, feature: &Feature) -> Result<Feature>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgFeatureRepository {
    pool: PgPool,
}

impl PgFeatureRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeatureRepository for PgFeatureRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Feature>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "features",
            COLUMNS,
            None,
            &["title", "description"],
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Feature>> {
        let feature =
            sqlx::query_as::<_, Feature>(&format!("SELECT {} FROM features WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(feature)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("features")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, feature: &Feature) -> Result<Feature> {
        sqlx::query_as::<_, Feature>(&format!(
            r#"
            INSERT INTO features (id, title, description, icon, order_number, is_active,
                                  created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(feature.id)
        .bind(&feature.title)
        .bind(&feature.description)
        .bind(&feature.icon)
        .bind(feature.order_number)
        .bind(feature.is_active)
        .bind(feature.audit.created_at)
        .bind(feature.audit.created_by)
        .bind(feature.audit.modified_at)
        .bind(feature.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, feature: &Feature) -> Result<Feature> {
        sqlx::query_as::<_, Feature>(&format!(
            r#"
            UPDATE features
            SET title = $2, description = $3, icon = $4, order_number = $5, is_active = $6,
                modified_at = $7, modified_by = $8
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(feature.id)
        .bind(&feature.title)
        .bind(&feature.description)
        .bind(&feature.icon)
        .bind(feature.order_number)
        .bind(feature.is_active)
        .bind(feature.audit.modified_at)
        .bind(feature.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Feature with id {} not found", feature.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM features WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
