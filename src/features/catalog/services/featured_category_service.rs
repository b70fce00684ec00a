use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::catalog::dtos::{
    CreateFeaturedCategoryDto, FeaturedCategoryResponseDto, UpdateFeaturedCategoryDto,
};
use crate::features::catalog::models::FeaturedCategory;
use crate::features::catalog::repositories::{CategoryRepository, FeaturedCategoryRepository};
use crate::features::catalog::services::category_service;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct FeaturedCategoryService {
    featured: Arc<dyn FeaturedCategoryRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl FeaturedCategoryService {
    pub fn new(
        featured: Arc<dyn FeaturedCategoryRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            featured,
            categories,
        }
    }

    pub async fn list(
        &self,
        query: &ListQuery,
    ) -> Result<(Vec<FeaturedCategoryResponseDto>, Meta)> {
        let (rows, total) = self.featured.list(query).await?;
        let items = rows
            .into_iter()
            .map(FeaturedCategoryResponseDto::from)
            .collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<FeaturedCategoryResponseDto> {
        self.find(id).await.map(FeaturedCategoryResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateFeaturedCategoryDto,
        actor: &AuthenticatedUser,
    ) -> Result<FeaturedCategoryResponseDto> {
        self.ensure_category(dto.category_id).await?;
        self.check_order_number(dto.order_number, None).await?;

        let featured = FeaturedCategory {
            id: Uuid::now_v7(),
            category_id: dto.category_id,
            title: dto.title.trim().to_string(),
            image_url: dto.image_url,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.featured.insert(&featured).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateFeaturedCategoryDto,
        actor: &AuthenticatedUser,
    ) -> Result<FeaturedCategoryResponseDto> {
        let mut featured = self.find(id).await?;

        if let Some(category_id) = dto.category_id {
            if category_id != featured.category_id {
                self.ensure_category(category_id).await?;
                featured.category_id = category_id;
            }
        }
        if let Some(order_number) = dto.order_number {
            if order_number != featured.order_number {
                self.check_order_number(order_number, Some(id)).await?;
                featured.order_number = order_number;
            }
        }
        if let Some(title) = dto.title {
            featured.title = title.trim().to_string();
        }
        if dto.image_url.is_some() {
            featured.image_url = dto.image_url;
        }
        if let Some(is_active) = dto.is_active {
            featured.is_active = is_active;
        }

        featured.audit.touch(actor.actor());
        let updated = self.featured.update(&featured).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.featured.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<FeaturedCategory> {
        self.featured
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn ensure_category(&self, category_id: Uuid) -> Result<()> {
        self.categories
            .find_by_id(category_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| category_service::not_found(category_id))
    }

    async fn check_order_number(&self, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self
            .featured
            .order_number_taken(order_number, exclude)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Featured category order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Featured category with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::repositories::{
        MockCategoryRepository, MockFeaturedCategoryRepository,
    };
    use crate::shared::test_helpers::create_editor_user;

    #[tokio::test]
    async fn test_create_for_missing_category_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().returning(|_| Ok(None));
        let mut featured = MockFeaturedCategoryRepository::new();
        featured.expect_insert().never();

        let service = FeaturedCategoryService::new(Arc::new(featured), Arc::new(categories));
        let dto = CreateFeaturedCategoryDto {
            category_id: Uuid::now_v7(),
            title: "Summer picks".to_string(),
            image_url: None,
            order_number: 1,
            is_active: None,
        };

        let result = service.create(dto, &create_editor_user()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
