use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::logistics::dtos::{ChannelResponseDto, CreateChannelDto, UpdateChannelDto};
use crate::features::logistics::models::Channel;
use crate::features::logistics::repositories::ChannelRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct ChannelService {
    channels: Arc<dyn ChannelRepository>,
}

impl ChannelService {
    pub fn new(channels: Arc<dyn ChannelRepository>) -> Self {
        Self { channels }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<ChannelResponseDto>, Meta)> {
        let (channels, total) = self.channels.list(query).await?;
        let items = channels.into_iter().map(ChannelResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<ChannelResponseDto> {
        self.find(id).await.map(ChannelResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateChannelDto,
        actor: &AuthenticatedUser,
    ) -> Result<ChannelResponseDto> {
        self.check_code(&dto.code, None).await?;

        let channel = Channel {
            id: Uuid::now_v7(),
            name: dto.name.trim().to_string(),
            code: dto.code,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.channels.insert(&channel).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateChannelDto,
        actor: &AuthenticatedUser,
    ) -> Result<ChannelResponseDto> {
        let mut channel = self.find(id).await?;

        if let Some(code) = dto.code {
            if code != channel.code {
                self.check_code(&code, Some(id)).await?;
                channel.code = code;
            }
        }
        if let Some(name) = dto.name {
            channel.name = name.trim().to_string();
        }
        if let Some(is_active) = dto.is_active {
            channel.is_active = is_active;
        }

        channel.audit.touch(actor.actor());
        let updated = self.channels.update(&channel).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.channels.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Channel> {
        self.channels.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_code(&self, code: &str, exclude: Option<Uuid>) -> Result<()> {
        if self.channels.code_taken(code, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Channel with code '{}' already exists",
                code
            )));
        }
        Ok(())
    }
}

pub(crate) fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Channel with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::logistics::repositories::MockChannelRepository;
    use crate::shared::test_helpers::create_admin_user;

    #[tokio::test]
    async fn test_unchanged_code_skips_check() {
        let channel = Channel {
            id: Uuid::now_v7(),
            name: "Web".to_string(),
            code: "WEB".to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        };
        let id = channel.id;

        let mut repo = MockChannelRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(channel.clone())));
        repo.expect_code_taken().never();
        repo.expect_update().returning(|c| Ok(c.clone()));

        let service = ChannelService::new(Arc::new(repo));
        let dto = UpdateChannelDto {
            name: Some("Web shop".to_string()),
            code: Some("WEB".to_string()),
            is_active: Some(false),
        };

        let updated = service.update(id, dto, &create_admin_user()).await.unwrap();
        assert_eq!(updated.name, "Web shop");
        assert!(!updated.is_active);
    }
}
