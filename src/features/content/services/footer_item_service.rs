use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::content::dtos::{
    CreateFooterItemDto, FooterItemResponseDto, UpdateFooterItemDto,
};
use crate::features::content::models::FooterItem;
use crate::features::content::repositories::FooterItemRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct FooterItemService {
    items: Arc<dyn FooterItemRepository>,
}

impl FooterItemService {
    pub fn new(items: Arc<dyn FooterItemRepository>) -> Self {
        Self { items }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<FooterItemResponseDto>, Meta)> {
        let (items, total) = self.items.list(query).await?;
        let items = items.into_iter().map(FooterItemResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<FooterItemResponseDto> {
        self.find(id).await.map(FooterItemResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateFooterItemDto,
        actor: &AuthenticatedUser,
    ) -> Result<FooterItemResponseDto> {
        let column_name = dto.column_name.trim().to_string();
        self.check_slot(&column_name, dto.order_number, None).await?;

        let item = FooterItem {
            id: Uuid::now_v7(),
            title: dto.title.trim().to_string(),
            url: dto.url,
            column_name,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.items.insert(&item).await?;
        Ok(created.into())
    }

    /// Moving an item to another column re-checks its order number there
    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateFooterItemDto,
        actor: &AuthenticatedUser,
    ) -> Result<FooterItemResponseDto> {
        let mut item = self.find(id).await?;

        let column_name = dto
            .column_name
            .map(|c| c.trim().to_string())
            .unwrap_or_else(|| item.column_name.clone());
        let order_number = dto.order_number.unwrap_or(item.order_number);

        if column_name != item.column_name || order_number != item.order_number {
            self.check_slot(&column_name, order_number, Some(id)).await?;
            item.column_name = column_name;
            item.order_number = order_number;
        }
        if let Some(title) = dto.title {
            item.title = title.trim().to_string();
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

    async fn find(&self, id: Uuid) -> Result<FooterItem> {
        self.items.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_slot(
        &self,
        column_name: &str,
        order_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<()> {
        if self
            .items
            .order_number_taken(column_name, order_number, exclude)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Order number {} is already in use in footer column '{}'",
                order_number, column_name
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Footer item with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::repositories::MockFooterItemRepository;
    use crate::shared::test_helpers::create_editor_user;

    fn item(column: &str, order: i32) -> FooterItem {
        FooterItem {
            id: Uuid::now_v7(),
            title: "About us".to_string(),
            url: "/about".to_string(),
            column_name: column.to_string(),
            order_number: order,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    #[tokio::test]
    async fn test_same_order_in_other_column_is_allowed() {
        let mut repo = MockFooterItemRepository::new();
        repo.expect_order_number_taken()
            .withf(|column: &str, order, _| column == "Help" && *order == 1)
            .returning(|_, _, _| Ok(false));
        repo.expect_insert().returning(|i| Ok(i.clone()));

        let service = FooterItemService::new(Arc::new(repo));
        let dto = CreateFooterItemDto {
            title: "Returns".to_string(),
            url: "/help/returns".to_string(),
            column_name: " Help ".to_string(),
            order_number: 1,
            is_active: None,
        };

        let created = service.create(dto, &create_editor_user()).await.unwrap();
        assert_eq!(created.column_name, "Help");
    }

    #[tokio::test]
    async fn test_moving_column_checks_target_slot() {
        let existing = item("Company", 2);
        let id = existing.id;

        let mut repo = MockFooterItemRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_order_number_taken()
            .withf(move |column: &str, order, exclude| {
                column == "Help" && *order == 2 && *exclude == Some(id)
            })
            .returning(|_, _, _| Ok(true));
        repo.expect_update().never();

        let service = FooterItemService::new(Arc::new(repo));
        let dto = UpdateFooterItemDto {
            column_name: Some("Help".to_string()),
            ..Default::default()
        };

        let result = service.update(id, dto, &create_editor_user()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_title_only_update_skips_slot_check() {
        let existing = item("Company", 2);
        let id = existing.id;

        let mut repo = MockFooterItemRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_order_number_taken().never();
        repo.expect_update().returning(|i| Ok(i.clone()));

        let service = FooterItemService::new(Arc::new(repo));
        let dto = UpdateFooterItemDto {
            title: Some("Who we are".to_string()),
            ..Default::default()
        };

        let updated = service.update(id, dto, &create_editor_user()).await.unwrap();
        assert_eq!(updated.title, "Who we are");
        assert_eq!(updated.order_number, 2);
    }
}
