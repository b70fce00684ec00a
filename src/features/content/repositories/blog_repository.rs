use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{map_db_error, AppError, Result};
use crate::features::content::models::Blog;
use crate::shared::query::{fetch_page, ExistsQuery};
use crate::shared::types::ListQuery;

const COLUMNS: &str = "id, title, slug, summary, content, cover_image_url, published_at, \
                       is_active, created_at, created_by, modified_at, modified_by";

/// Newest published first, drafts last
const LIST_ORDER: &str = "published_at DESC NULLS LAST, created_at DESC";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Blog>, i64)>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>>;
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool>;
    async fn insert(&self, blog: &Blog) -> Result<Blog>;
    async fn update(&self, blog: &Blog) -> Result<Blog>;
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn list(&self, query: &ListQuery) -> Result<(Vec<Blog>, i64)> {
        Ok(fetch_page(
            &self.pool,
            "blogs",
            COLUMNS,
            None,
            &["title", "slug", "summary"],
            LIST_ORDER,
            query,
        )
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(&format!("SELECT {} FROM blogs WHERE id = $1", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(blog)
    }

    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(ExistsQuery::new("blogs")
            .eq("slug", slug.to_string())
            .excluding(exclude)
            .fetch(&self.pool)
            .await?)
    }

    async fn insert(&self, blog: &Blog) -> Result<Blog> {
        sqlx::query_as::<_, Blog>(&format!(
            r#"
            INSERT INTO blogs (id, title, slug, summary, content, cover_image_url, published_at,
                               is_active, created_at, created_by, modified_at, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.slug)
        .bind(&blog.summary)
        .bind(&blog.content)
        .bind(&blog.cover_image_url)
        .bind(blog.published_at)
        .bind(blog.is_active)
        .bind(blog.audit.created_at)
        .bind(blog.audit.created_by)
        .bind(blog.audit.modified_at)
        .bind(blog.audit.modified_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Blog slug already in use"))
    }

    async fn update(&self, blog: &Blog) -> Result<Blog> {
        sqlx::query_as::<_, Blog>(&format!(
            r#"
            UPDATE blogs
            SET title = $2, slug = $3, summary = $4, content = $5, cover_image_url = $6,
                published_at = $7, is_active = $8, modified_at = $9, modified_by = $10
            WHERE id = $1
            RETURNING {}
            "#,
            COLUMNS
        ))
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.slug)
        .bind(&blog.summary)
        .bind(&blog.content)
        .bind(&blog.cover_image_url)
        .bind(blog.published_at)
        .bind(blog.is_active)
        .bind(blog.audit.modified_at)
        .bind(blog.audit.modified_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Blog slug already in use"))?
        .ok_or_else(|| AppError::NotFound(format!("Blog with id {} not found", blog.id)))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
