use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::content::dtos::{CreateMenuItemDto, MenuItemResponseDto, UpdateMenuItemDto};
use crate::features::content::models::MenuItem;
use crate::features::content::repositories::MenuItemRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct MenuItemService {
    items: Arc<dyn MenuItemRepository>,
}

impl MenuItemService {
    pub fn new(items: Arc<dyn MenuItemRepository>) -> Self {
        Self { items }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<MenuItemResponseDto>, Meta)> {
        let (items, total) = self.items.list(query).await?;
        let items = items.into_iter().map(MenuItemResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<MenuItemResponseDto> {
        self.find(id).await.map(MenuItemResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateMenuItemDto,
        actor: &AuthenticatedUser,
    ) -> Result<MenuItemResponseDto> {
        let label = dto.label.trim().to_string();
        self.check_label(&label, None).await?;
        self.check_order_number(dto.order_number, None).await?;

        let item = MenuItem {
            id: Uuid::now_v7(),
            label,
            url: dto.url,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.items.insert(&item).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateMenuItemDto,
        actor: &AuthenticatedUser,
    ) -> Result<MenuItemResponseDto> {
        let mut item = self.find(id).await?;

        if let Some(label) = dto.label {
            let label = label.trim().to_string();
            if !label.eq_ignore_ascii_case(&item.label) {
                self.check_label(&label, Some(id)).await?;
            }
            item.label = label;
        }
        if let Some(order_number) = dto.order_number {
            if order_number != item.order_number {
                self.check_order_number(order_number, Some(id)).await?;
                item.order_number = order_number;
            }
        }
        if let Some(url) = dto.url {
            item.url = url;
        }
        if let Some(is_active) = dto.is_active {
            item.is_active = is_active;
        }

        item.audit.touch(actor.actor());
        let updated = self.items.update(&item).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.items.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<MenuItem> {
        self.items.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_label(&self, label: &str, exclude: Option<Uuid>) -> Result<()> {
        if self.items.label_taken(label, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Menu item '{}' already exists",
                label
            )));
        }
        Ok(())
    }

    async fn check_order_number(&self, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self.items.order_number_taken(order_number, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Menu order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Menu item with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::repositories::MockMenuItemRepository;
    use crate::shared::test_helpers::create_editor_user;

    fn dto() -> CreateMenuItemDto {
        CreateMenuItemDto {
            label: "Cameras".to_string(),
            url: "/c/cameras".to_string(),
            order_number: 3,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_label_is_conflict() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_label_taken().returning(|_, _| Ok(true));
        repo.expect_order_number_taken().never();
        repo.expect_insert().never();

        let service = MenuItemService::new(Arc::new(repo));
        let result = service.create(dto(), &create_editor_user()).await;

        assert!(matches!(result, Err(AppError::Conflict(msg)) if msg.contains("Cameras")));
    }

    #[tokio::test]
    async fn test_duplicate_order_is_conflict() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_label_taken().returning(|_, _| Ok(false));
        repo.expect_order_number_taken().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = MenuItemService::new(Arc::new(repo));
        let result = service.create(dto(), &create_editor_user()).await;

        assert!(matches!(result, Err(AppError::Conflict(msg)) if msg.contains("order number")));
    }
}
