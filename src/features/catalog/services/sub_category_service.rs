use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::catalog::dtos::{
    CreateSubCategoryDto, SubCategoryResponseDto, UpdateSubCategoryDto,
};
use crate::features::catalog::models::SubCategory;
use crate::features::catalog::repositories::{CategoryRepository, SubCategoryRepository};
use crate::features::catalog::services::category_service;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct SubCategoryService {
    sub_categories: Arc<dyn SubCategoryRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl SubCategoryService {
    pub fn new(
        sub_categories: Arc<dyn SubCategoryRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            sub_categories,
            categories,
        }
    }

    pub async fn list_for_category(
        &self,
        category_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<SubCategoryResponseDto>, Meta)> {
        self.ensure_category(category_id).await?;

        let (rows, total) = self
            .sub_categories
            .list_by_category(category_id, query)
            .await?;
        let items = rows.into_iter().map(SubCategoryResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<SubCategoryResponseDto> {
        self.find(id).await.map(SubCategoryResponseDto::from)
    }

    pub async fn create(
        &self,
        category_id: Uuid,
        dto: CreateSubCategoryDto,
        actor: &AuthenticatedUser,
    ) -> Result<SubCategoryResponseDto> {
        self.ensure_category(category_id).await?;
        self.check_unique(category_id, &dto.slug, dto.order_number, None)
            .await?;

        let sub_category = SubCategory {
            id: Uuid::now_v7(),
            category_id,
            name: dto.name.trim().to_string(),
            slug: dto.slug,
            description: dto.description,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.sub_categories.insert(&sub_category).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateSubCategoryDto,
        actor: &AuthenticatedUser,
    ) -> Result<SubCategoryResponseDto> {
        let mut sub_category = self.find(id).await?;

        let category_id = dto.category_id.unwrap_or(sub_category.category_id);
        if category_id != sub_category.category_id {
            self.ensure_category(category_id).await?;
        }

        let slug = dto.slug.unwrap_or_else(|| sub_category.slug.clone());
        let order_number = dto.order_number.unwrap_or(sub_category.order_number);
        if category_id != sub_category.category_id
            || slug != sub_category.slug
            || order_number != sub_category.order_number
        {
            self.check_unique(category_id, &slug, order_number, Some(id))
                .await?;
        }

        sub_category.category_id = category_id;
        sub_category.slug = slug;
        sub_category.order_number = order_number;
        if let Some(name) = dto.name {
            sub_category.name = name.trim().to_string();
        }
        if dto.description.is_some() {
            sub_category.description = dto.description;
        }
        if let Some(is_active) = dto.is_active {
            sub_category.is_active = is_active;
        }

        sub_category.audit.touch(actor.actor());
        let updated = self.sub_categories.update(&sub_category).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.sub_categories.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<SubCategory> {
        self.sub_categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn ensure_category(&self, category_id: Uuid) -> Result<()> {
        match self.categories.find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(category_service::not_found(category_id)),
        }
    }

    async fn check_unique(
        &self,
        category_id: Uuid,
        slug: &str,
        order_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<()> {
        if self.sub_categories.slug_taken(slug, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Sub-category slug '{}' is already in use",
                slug
            )));
        }
        if self
            .sub_categories
            .order_number_taken(category_id, order_number, exclude)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Order number {} is already in use within this category",
                order_number
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Sub-category with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::models::Category;
    use crate::features::catalog::repositories::{
        MockCategoryRepository, MockSubCategoryRepository,
    };
    use crate::shared::test_helpers::create_editor_user;

    fn category(id: Uuid) -> Category {
        Category {
            id,
            name: "Kitchen".to_string(),
            slug: "kitchen".to_string(),
            description: None,
            image_url: None,
            order_number: 1,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    fn create_dto() -> CreateSubCategoryDto {
        CreateSubCategoryDto {
            name: "Dining Tables".to_string(),
            slug: "dining-tables".to_string(),
            description: None,
            order_number: 1,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_create_under_missing_category_is_not_found() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find_by_id().returning(|_| Ok(None));
        let mut subs = MockSubCategoryRepository::new();
        subs.expect_insert().never();

        let service = SubCategoryService::new(Arc::new(subs), Arc::new(categories));
        let result = service
            .create(Uuid::now_v7(), create_dto(), &create_editor_user())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.starts_with("Category")));
    }

    #[tokio::test]
    async fn test_order_number_checked_within_parent() {
        let parent = Uuid::now_v7();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .returning(|id| Ok(Some(category(id))));

        let mut subs = MockSubCategoryRepository::new();
        subs.expect_slug_taken().returning(|_, _| Ok(false));
        subs.expect_order_number_taken()
            .withf(move |cat, order, exclude| *cat == parent && *order == 1 && exclude.is_none())
            .returning(|_, _, _| Ok(true));
        subs.expect_insert().never();

        let service = SubCategoryService::new(Arc::new(subs), Arc::new(categories));
        let result = service
            .create(parent, create_dto(), &create_editor_user())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_success() {
        let parent = Uuid::now_v7();
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_id()
            .returning(|id| Ok(Some(category(id))));

        let mut subs = MockSubCategoryRepository::new();
        subs.expect_slug_taken().returning(|_, _| Ok(false));
        subs.expect_order_number_taken()
            .returning(|_, _, _| Ok(false));
        subs.expect_insert().returning(|s| Ok(s.clone()));

        let service = SubCategoryService::new(Arc::new(subs), Arc::new(categories));
        let created = service
            .create(parent, create_dto(), &create_editor_user())
            .await
            .unwrap();

        assert_eq!(created.category_id, parent);
        assert_eq!(created.slug, "dining-tables");
    }
}
