use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::catalog::dtos::{CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto};
use crate::features::catalog::models::Category;
use crate::features::catalog::repositories::CategoryRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<CategoryResponseDto>, Meta)> {
        let (categories, total) = self.categories.list(query).await?;
        let items = categories
            .into_iter()
            .map(CategoryResponseDto::from)
            .collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.find(id).await.map(CategoryResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateCategoryDto,
        actor: &AuthenticatedUser,
    ) -> Result<CategoryResponseDto> {
        self.check_unique(&dto.slug, dto.order_number, None).await?;

        let category = Category {
            id: Uuid::now_v7(),
            name: dto.name.trim().to_string(),
            slug: dto.slug,
            description: dto.description,
            image_url: dto.image_url,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.categories.insert(&category).await?;
        tracing::info!("Category {} ({}) created", created.id, created.slug);

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateCategoryDto,
        actor: &AuthenticatedUser,
    ) -> Result<CategoryResponseDto> {
        let mut category = self.find(id).await?;

        let slug = dto.slug.unwrap_or_else(|| category.slug.clone());
        let order_number = dto.order_number.unwrap_or(category.order_number);
        if slug != category.slug || order_number != category.order_number {
            self.check_unique(&slug, order_number, Some(id)).await?;
        }

        category.slug = slug;
        category.order_number = order_number;
        if let Some(name) = dto.name {
            category.name = name.trim().to_string();
        }
        if dto.description.is_some() {
            category.description = dto.description;
        }
        if dto.image_url.is_some() {
            category.image_url = dto.image_url;
        }
        if let Some(is_active) = dto.is_active {
            category.is_active = is_active;
        }

        category.audit.touch(actor.actor());
        let updated = self.categories.update(&category).await?;

        Ok(updated.into())
    }

    /// Sub-categories and featured entries are removed with the category
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.categories.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Category {} deleted", id);
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Category> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn check_unique(&self, slug: &str, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self.categories.slug_taken(slug, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Category slug '{}' is already in use",
                slug
            )));
        }
        if self
            .categories
            .order_number_taken(order_number, exclude)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Category order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

pub(crate) fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Category with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::repositories::MockCategoryRepository;
    use crate::shared::test_helpers::create_editor_user;

    fn create_dto() -> CreateCategoryDto {
        CreateCategoryDto {
            name: "  Bedroom ".to_string(),
            slug: "bedroom".to_string(),
            description: None,
            image_url: None,
            order_number: 2,
            is_active: None,
        }
    }

    fn stored(order_number: i32) -> Category {
        Category {
            id: Uuid::now_v7(),
            name: "Bedroom".to_string(),
            slug: "bedroom".to_string(),
            description: None,
            image_url: None,
            order_number,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    #[tokio::test]
    async fn test_create_stamps_creator() {
        let editor = create_editor_user();
        let editor_id = editor.user_id;

        let mut repo = MockCategoryRepository::new();
        repo.expect_slug_taken().returning(|_, _| Ok(false));
        repo.expect_order_number_taken().returning(|_, _| Ok(false));
        repo.expect_insert()
            .withf(move |c: &Category| {
                c.name == "Bedroom" && c.is_active && c.audit.created_by == Some(editor_id)
            })
            .returning(|c| Ok(c.clone()));

        let service = CategoryService::new(Arc::new(repo));
        let created = service.create(create_dto(), &editor).await.unwrap();

        assert_eq!(created.audit.created_by, Some(editor_id));
        assert!(created.audit.modified_at.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_order_number_is_conflict() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_slug_taken().returning(|_, _| Ok(false));
        repo.expect_order_number_taken().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = CategoryService::new(Arc::new(repo));
        let result = service.create(create_dto(), &create_editor_user()).await;

        assert!(matches!(result, Err(AppError::Conflict(msg)) if msg.contains("order number 2")));
    }

    #[tokio::test]
    async fn test_create_duplicate_slug_is_conflict() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_slug_taken().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = CategoryService::new(Arc::new(repo));
        let result = service.create(create_dto(), &create_editor_user()).await;

        assert!(matches!(result, Err(AppError::Conflict(msg)) if msg.contains("bedroom")));
    }

    #[tokio::test]
    async fn test_update_same_values_skips_uniqueness_check() {
        let existing = stored(4);
        let id = existing.id;

        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_slug_taken().never();
        repo.expect_order_number_taken().never();
        repo.expect_update().returning(|c| Ok(c.clone()));

        let service = CategoryService::new(Arc::new(repo));
        let dto = UpdateCategoryDto {
            name: Some("Master Bedroom".to_string()),
            order_number: Some(4),
            ..Default::default()
        };
        let updated = service.update(id, dto, &create_editor_user()).await.unwrap();

        assert_eq!(updated.name, "Master Bedroom");
        assert!(updated.audit.modified_at.is_some());
    }

    #[tokio::test]
    async fn test_update_to_taken_order_number_excludes_self() {
        let existing = stored(4);
        let id = existing.id;

        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_slug_taken().returning(|_, _| Ok(false));
        repo.expect_order_number_taken()
            .withf(move |order, exclude| *order == 7 && *exclude == Some(id))
            .returning(|_, _| Ok(true));
        repo.expect_update().never();

        let service = CategoryService::new(Arc::new(repo));
        let dto = UpdateCategoryDto {
            order_number: Some(7),
            ..Default::default()
        };
        let result = service.update(id, dto, &create_editor_user()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = CategoryService::new(Arc::new(repo));
        assert!(matches!(
            service.delete(Uuid::now_v7()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
