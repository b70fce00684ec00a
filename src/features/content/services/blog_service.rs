use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::content::dtos::{BlogResponseDto, CreateBlogDto, UpdateBlogDto};
use crate::features::content::models::Blog;
use crate::features::content::repositories::BlogRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct BlogService {
    blogs: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }

    /// Newest published posts first, drafts after them
    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<BlogResponseDto>, Meta)> {
        let (blogs, total) = self.blogs.list(query).await?;
        let items = blogs.into_iter().map(BlogResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<BlogResponseDto> {
        self.find(id).await.map(BlogResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateBlogDto,
        actor: &AuthenticatedUser,
    ) -> Result<BlogResponseDto> {
        self.check_slug(&dto.slug, None).await?;

        let blog = Blog {
            id: Uuid::now_v7(),
            title: dto.title.trim().to_string(),
            slug: dto.slug,
            summary: dto.summary,
            content: dto.content,
            cover_image_url: dto.cover_image_url,
            published_at: dto.published_at,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.blogs.insert(&blog).await?;
        tracing::info!("Blog {} ({}) created", created.id, created.slug);

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateBlogDto,
        actor: &AuthenticatedUser,
    ) -> Result<BlogResponseDto> {
        let mut blog = self.find(id).await?;

        if let Some(slug) = dto.slug {
            if slug != blog.slug {
                self.check_slug(&slug, Some(id)).await?;
                blog.slug = slug;
            }
        }
        if let Some(title) = dto.title {
            blog.title = title.trim().to_string();
        }
        if dto.summary.is_some() {
            blog.summary = dto.summary;
        }
        if let Some(content) = dto.content {
            blog.content = content;
        }
        if dto.cover_image_url.is_some() {
            blog.cover_image_url = dto.cover_image_url;
        }
        if dto.published_at.is_some() {
            blog.published_at = dto.published_at;
        }
        if let Some(is_active) = dto.is_active {
            blog.is_active = is_active;
        }

        blog.audit.touch(actor.actor());
        let updated = self.blogs.update(&blog).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.blogs.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Blog> {
        self.blogs.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_slug(&self, slug: &str, exclude: Option<Uuid>) -> Result<()> {
        if self.blogs.slug_taken(slug, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Blog with slug '{}' already exists",
                slug
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Blog with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::repositories::MockBlogRepository;
    use crate::shared::test_helpers::create_editor_user;
    use chrono::Utc;

    fn existing() -> Blog {
        Blog {
            id: Uuid::now_v7(),
            title: "Draft".to_string(),
            slug: "draft".to_string(),
            summary: None,
            content: "Work in progress".to_string(),
            cover_image_url: None,
            published_at: None,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_conflict() {
        let mut repo = MockBlogRepository::new();
        repo.expect_slug_taken().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = BlogService::new(Arc::new(repo));
        let dto = CreateBlogDto {
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            summary: None,
            content: "World".to_string(),
            cover_image_url: None,
            published_at: None,
            is_active: None,
        };

        let result = service.create(dto, &create_editor_user()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_publish_and_touch() {
        let blog = existing();
        let id = blog.id;
        let editor = create_editor_user();
        let editor_id = editor.user_id;

        let mut repo = MockBlogRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(blog.clone())));
        repo.expect_slug_taken().never();
        repo.expect_update()
            .withf(move |b| b.published_at.is_some() && b.audit.modified_by == Some(editor_id))
            .returning(|b| Ok(b.clone()));

        let service = BlogService::new(Arc::new(repo));
        let dto = UpdateBlogDto {
            slug: Some("draft".to_string()),
            published_at: Some(Utc::now()),
            ..Default::default()
        };

        let updated = service.update(id, dto, &editor).await.unwrap();
        assert!(updated.published_at.is_some());
        assert!(updated.audit.modified_at.is_some());
    }
}
