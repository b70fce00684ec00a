use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::logistics::dtos::{
    CreateWarehouseDto, UpdateWarehouseDto, WarehouseResponseDto,
};
use crate::features::logistics::models::Warehouse;
use crate::features::logistics::repositories::WarehouseRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct WarehouseService {
    warehouses: Arc<dyn WarehouseRepository>,
}

impl WarehouseService {
    pub fn new(warehouses: Arc<dyn WarehouseRepository>) -> Self {
        Self { warehouses }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<WarehouseResponseDto>, Meta)> {
        let (warehouses, total) = self.warehouses.list(query).await?;
        let items = warehouses
            .into_iter()
            .map(WarehouseResponseDto::from)
            .collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<WarehouseResponseDto> {
        self.find(id).await.map(WarehouseResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateWarehouseDto,
        actor: &AuthenticatedUser,
    ) -> Result<WarehouseResponseDto> {
        self.check_code(&dto.code, None).await?;

        let warehouse = Warehouse {
            id: Uuid::now_v7(),
            name: dto.name.trim().to_string(),
            code: dto.code,
            city: dto.city.trim().to_string(),
            address: dto.address,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.warehouses.insert(&warehouse).await?;
        tracing::info!("Warehouse {} ({}) created", created.id, created.code);

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateWarehouseDto,
        actor: &AuthenticatedUser,
    ) -> Result<WarehouseResponseDto> {
        let mut warehouse = self.find(id).await?;

        if let Some(code) = dto.code {
            if code != warehouse.code {
                self.check_code(&code, Some(id)).await?;
                warehouse.code = code;
            }
        }
        if let Some(name) = dto.name {
            warehouse.name = name.trim().to_string();
        }
        if let Some(city) = dto.city {
            warehouse.city = city.trim().to_string();
        }
        if dto.address.is_some() {
            warehouse.address = dto.address;
        }
        if let Some(is_active) = dto.is_active {
            warehouse.is_active = is_active;
        }

        warehouse.audit.touch(actor.actor());
        let updated = self.warehouses.update(&warehouse).await?;

        Ok(updated.into())
    }

    /// Also removes the warehouse's channel connections
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.warehouses.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Warehouse> {
        self.warehouses
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn check_code(&self, code: &str, exclude: Option<Uuid>) -> Result<()> {
        if self.warehouses.code_taken(code, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Warehouse with code '{}' already exists",
                code
            )));
        }
        Ok(())
    }
}

pub(crate) fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Warehouse with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::logistics::repositories::MockWarehouseRepository;
    use crate::shared::test_helpers::create_admin_user;

    #[tokio::test]
    async fn test_duplicate_code_is_conflict() {
        let mut repo = MockWarehouseRepository::new();
        repo.expect_code_taken()
            .withf(|code: &str, exclude| code == "IST-01" && exclude.is_none())
            .returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = WarehouseService::new(Arc::new(repo));
        let dto = CreateWarehouseDto {
            name: "Istanbul depot".to_string(),
            code: "IST-01".to_string(),
            city: "Istanbul".to_string(),
            address: None,
            is_active: None,
        };

        let result = service.create(dto, &create_admin_user()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let mut repo = MockWarehouseRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = WarehouseService::new(Arc::new(repo));
        let result = service.get(Uuid::now_v7()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
