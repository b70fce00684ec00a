use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::logistics::dtos::{
    CreateWarehouseConnectionDto, UpdateWarehouseConnectionDto, WarehouseConnectionResponseDto,
};
use crate::features::logistics::models::WarehouseConnection;
use crate::features::logistics::repositories::{
    ChannelRepository, WarehouseConnectionRepository, WarehouseRepository,
};
use crate::features::logistics::services::{channel_service, warehouse_service};
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

/// Warehouse-to-channel links. A warehouse connects to a channel at most once.
pub struct WarehouseConnectionService {
    connections: Arc<dyn WarehouseConnectionRepository>,
    warehouses: Arc<dyn WarehouseRepository>,
    channels: Arc<dyn ChannelRepository>,
}

impl WarehouseConnectionService {
    pub fn new(
        connections: Arc<dyn WarehouseConnectionRepository>,
        warehouses: Arc<dyn WarehouseRepository>,
        channels: Arc<dyn ChannelRepository>,
    ) -> Self {
        Self {
            connections,
            warehouses,
            channels,
        }
    }

    pub async fn list_for_warehouse(
        &self,
        warehouse_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<WarehouseConnectionResponseDto>, Meta)> {
        self.ensure_warehouse(warehouse_id).await?;

        let (rows, total) = self
            .connections
            .list_by_warehouse(warehouse_id, query)
            .await?;
        let items = rows
            .into_iter()
            .map(WarehouseConnectionResponseDto::from)
            .collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<WarehouseConnectionResponseDto> {
        self.find(id).await.map(WarehouseConnectionResponseDto::from)
    }

    pub async fn create(
        &self,
        warehouse_id: Uuid,
        dto: CreateWarehouseConnectionDto,
        actor: &AuthenticatedUser,
    ) -> Result<WarehouseConnectionResponseDto> {
        self.ensure_warehouse(warehouse_id).await?;
        self.ensure_channel(dto.channel_id).await?;
        self.check_pair(warehouse_id, dto.channel_id, None).await?;

        let connection = WarehouseConnection {
            id: Uuid::now_v7(),
            warehouse_id,
            channel_id: dto.channel_id,
            external_reference: dto.external_reference,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.connections.insert(&connection).await?;
        tracing::info!(
            "Warehouse {} connected to channel {}",
            created.warehouse_id,
            created.channel_id
        );

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateWarehouseConnectionDto,
        actor: &AuthenticatedUser,
    ) -> Result<WarehouseConnectionResponseDto> {
        let mut connection = self.find(id).await?;

        if let Some(channel_id) = dto.channel_id {
            if channel_id != connection.channel_id {
                self.ensure_channel(channel_id).await?;
                self.check_pair(connection.warehouse_id, channel_id, Some(id))
                    .await?;
                connection.channel_id = channel_id;
            }
        }
        if dto.external_reference.is_some() {
            connection.external_reference = dto.external_reference;
        }
        if let Some(is_active) = dto.is_active {
            connection.is_active = is_active;
        }

        connection.audit.touch(actor.actor());
        let updated = self.connections.update(&connection).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.connections.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<WarehouseConnection> {
        self.connections
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn ensure_warehouse(&self, warehouse_id: Uuid) -> Result<()> {
        match self.warehouses.find_by_id(warehouse_id).await? {
            Some(_) => Ok(()),
            None => Err(warehouse_service::not_found(warehouse_id)),
        }
    }

    async fn ensure_channel(&self, channel_id: Uuid) -> Result<()> {
        match self.channels.find_by_id(channel_id).await? {
            Some(_) => Ok(()),
            None => Err(channel_service::not_found(channel_id)),
        }
    }

    async fn check_pair(
        &self,
        warehouse_id: Uuid,
        channel_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<()> {
        if self
            .connections
            .pair_taken(warehouse_id, channel_id, exclude)
            .await?
        {
            return Err(AppError::Conflict(
                "Warehouse is already connected to this channel".to_string(),
            ));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Warehouse connection with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::logistics::models::{Channel, Warehouse};
    use crate::features::logistics::repositories::{
        MockChannelRepository, MockWarehouseConnectionRepository, MockWarehouseRepository,
    };
    use crate::shared::test_helpers::create_admin_user;

    fn warehouses_with(found: bool) -> MockWarehouseRepository {
        let mut repo = MockWarehouseRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(found.then(|| Warehouse {
                id,
                name: "Ankara depot".to_string(),
                code: "ANK-01".to_string(),
                city: "Ankara".to_string(),
                address: None,
                is_active: true,
                audit: AuditTrail::created(None),
            }))
        });
        repo
    }

    fn channels_with(found: bool) -> MockChannelRepository {
        let mut repo = MockChannelRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(found.then(|| Channel {
                id,
                name: "Marketplace".to_string(),
                code: "MKT".to_string(),
                is_active: true,
                audit: AuditTrail::created(None),
            }))
        });
        repo
    }

    fn dto() -> CreateWarehouseConnectionDto {
        CreateWarehouseConnectionDto {
            channel_id: Uuid::now_v7(),
            external_reference: Some("WH-778".to_string()),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_connect() {
        let mut repo = MockWarehouseConnectionRepository::new();
        repo.expect_pair_taken().returning(|_, _, _| Ok(false));
        repo.expect_insert().returning(|c| Ok(c.clone()));

        let service = WarehouseConnectionService::new(
            Arc::new(repo),
            Arc::new(warehouses_with(true)),
            Arc::new(channels_with(true)),
        );
        let warehouse_id = Uuid::now_v7();

        let created = service
            .create(warehouse_id, dto(), &create_admin_user())
            .await
            .unwrap();

        assert_eq!(created.warehouse_id, warehouse_id);
        assert_eq!(created.external_reference.as_deref(), Some("WH-778"));
    }

    #[tokio::test]
    async fn test_missing_warehouse_is_not_found() {
        let mut repo = MockWarehouseConnectionRepository::new();
        repo.expect_insert().never();

        let service = WarehouseConnectionService::new(
            Arc::new(repo),
            Arc::new(warehouses_with(false)),
            Arc::new(MockChannelRepository::new()),
        );

        let result = service
            .create(Uuid::now_v7(), dto(), &create_admin_user())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.starts_with("Warehouse")));
    }

    #[tokio::test]
    async fn test_missing_channel_is_not_found() {
        let mut repo = MockWarehouseConnectionRepository::new();
        repo.expect_insert().never();

        let service = WarehouseConnectionService::new(
            Arc::new(repo),
            Arc::new(warehouses_with(true)),
            Arc::new(channels_with(false)),
        );

        let result = service
            .create(Uuid::now_v7(), dto(), &create_admin_user())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.starts_with("Channel")));
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_conflict() {
        let mut repo = MockWarehouseConnectionRepository::new();
        repo.expect_pair_taken().returning(|_, _, _| Ok(true));
        repo.expect_insert().never();

        let service = WarehouseConnectionService::new(
            Arc::new(repo),
            Arc::new(warehouses_with(true)),
            Arc::new(channels_with(true)),
        );

        let result = service
            .create(Uuid::now_v7(), dto(), &create_admin_user())
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
