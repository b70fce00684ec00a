use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::content::models::Slider;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, title, subtitle, image_url, link_url, order_number, is_active, \
                       created_at, created_by, modified_at, modified_by";
const CONFLICT: &str = "Slider order number already in use";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SliderRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Slider>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Slider>>;
    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, slider: &Slider) -> Result<Slider>;
    async fn update(&self, slider: &Slider) -> Result<Slider>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgSliderRepository {
    pool: PgPool,
}

impl PgSliderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SliderRepository for PgSliderRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Slider>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "sliders",
            COLUMNS,
            None,
            &["title", "subtitle"],
            "order_number ASC",
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Slider>> {
        let slider =
            sqlx::query_as::<_, Slider>(&format!("SELECT {} FROM sliders WHERE id = $1", COLUMNS))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(slider)
    }

    async fn order_number_taken(&self, order_number: i32, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("sliders")
            .eq("order_number", order_number)
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, slider: &Slider) -> Result<Slider> {
        sqlx::query_as::<_, Slider>(&format!(
            r#"
            INSERT INTO sliders (id, title, subtitle, image_url, link_url, order_number, is_active,
                                 created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(slider.id)
        .bind(&slider.title)
        .bind(&slider.subtitle)
        .bind(&slider.image_url)
        .bind(&slider.link_url)
        .bind(slider.order_number)
        .bind(slider.is_active)
        .bind(slider.audit.created_at)
        .bind(slider.audit.created_by)
        .bind(slider.audit.modified_at)
        .bind(slider.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))
    }

    async fn update(&self, slider: &Slider) -> Result<Slider> {
        sqlx::query_as::<_, Slider>(&format!(
            r#"
            UPDATE sliders
            SET title = $2, subtitle = $3, image_url = $4, link_url = $5, order_number = $6,
                is_active = $7, modified_at = $8, modified_by = $9
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(slider.id)
        .bind(&slider.title)
        .bind(&slider.subtitle)
        .bind(&slider.image_url)
        .bind(&slider.link_url)
        .bind(slider.order_number)
        .bind(slider.is_active)
        .bind(slider.audit.modified_at)
        .bind(slider.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, CONFLICT))?
        .ok_or_else(|| AppError::NotFound(format!("Slider with id {} not found", slider.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
