use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::content::dtos::{CreateFeatureDto, FeatureResponseDto, UpdateFeatureDto};
use crate::features::content::models::Feature;
use crate::features::content::repositories::FeatureRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct FeatureService {
    features: Arc<dyn FeatureRepository>,
}

impl FeatureService {
    pub fn new(features: Arc<dyn FeatureRepository>) -> Self {
        Self { features }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<FeatureResponseDto>, Meta)> {
        let (features, total) = self.features.list(query).await?;
        let items = features.into_iter().map(FeatureResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<FeatureResponseDto> {
        self.find(id).await.map(FeatureResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateFeatureDto,
        actor: &AuthenticatedUser,
    ) -> Result<FeatureResponseDto> {
        self.check_order_number(dto.order_number, None).await?;

        let feature = Feature {
            id: Uuid::now_v7(),
            title: dto.title.trim().to_string(),
            description: dto.description,
            icon: dto.icon,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.features.insert(&feature).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateFeatureDto,
        actor: &AuthenticatedUser,
    ) -> Result<FeatureResponseDto> {
        let mut feature = self.find(id).await?;

        if let Some(order_number) = dto.order_number {
            if order_number != feature.order_number {
                self.check_order_number(order_number, Some(id)).await?;
                feature.order_number = order_number;
            }
        }
        if let Some(title) = dto.title {
            feature.title = title.trim().to_string();
        }
        if dto.description.is_some() {
            feature.description = dto.description;
        }
        if dto.icon.is_some() {
            feature.icon = dto.icon;
        }
        if let Some(is_active) = dto.is_active {
            feature.is_active = is_active;
        }

        feature.audit.touch(actor.actor());
        let updated = self.features.update(&feature).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.features.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Feature> {
        self.features.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_order_number(&self, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self.features.order_number_taken(order_number, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Feature order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Feature with id {} not found", id))
}
