use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::content::dtos::{CreateSliderDto, SliderResponseDto, UpdateSliderDto};
use crate::features::content::models::Slider;
use crate::features::content::repositories::SliderRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct SliderService {
    sliders: Arc<dyn SliderRepository>,
}

impl SliderService {
    pub fn new(sliders: Arc<dyn SliderRepository>) -> Self {
        Self { sliders }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<SliderResponseDto>, Meta)> {
        let (sliders, total) = self.sliders.list(query).await?;
        let items = sliders.into_iter().map(SliderResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<SliderResponseDto> {
        self.find(id).await.map(SliderResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateSliderDto,
        actor: &AuthenticatedUser,
    ) -> Result<SliderResponseDto> {
        self.check_order_number(dto.order_number, None).await?;

        let slider = Slider {
            id: Uuid::now_v7(),
            title: dto.title.trim().to_string(),
            subtitle: dto.subtitle,
            image_url: dto.image_url,
            link_url: dto.link_url,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.sliders.insert(&slider).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateSliderDto,
        actor: &AuthenticatedUser,
    ) -> Result<SliderResponseDto> {
        let mut slider = self.find(id).await?;

        if let Some(order_number) = dto.order_number {
            if order_number != slider.order_number {
                self.check_order_number(order_number, Some(id)).await?;
                slider.order_number = order_number;
            }
        }
        if let Some(title) = dto.title {
            slider.title = title.trim().to_string();
        }
        if dto.subtitle.is_some() {
            slider.subtitle = dto.subtitle;
        }
        if let Some(image_url) = dto.image_url {
            slider.image_url = image_url;
        }
        if dto.link_url.is_some() {
            slider.link_url = dto.link_url;
        }
        if let Some(is_active) = dto.is_active {
            slider.is_active = is_active;
        }

        slider.audit.touch(actor.actor());
        let updated = self.sliders.update(&slider).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.sliders.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Slider> {
        self.sliders.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_order_number(&self, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self.sliders.order_number_taken(order_number, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Slider order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Slider with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::repositories::MockSliderRepository;
    use crate::shared::test_helpers::create_editor_user;

    fn dto(order_number: i32) -> CreateSliderDto {
        CreateSliderDto {
            title: "Summer rentals".to_string(),
            subtitle: None,
            image_url: "https://cdn.example.com/summer.jpg".to_string(),
            link_url: Some("/summer".to_string()),
            order_number,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_order_number_is_conflict() {
        let mut repo = MockSliderRepository::new();
        repo.expect_order_number_taken()
            .withf(|order, exclude| *order == 1 && exclude.is_none())
            .returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = SliderService::new(Arc::new(repo));
        let result = service.create(dto(1), &create_editor_user()).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_defaults_to_active() {
        let mut repo = MockSliderRepository::new();
        repo.expect_order_number_taken().returning(|_, _| Ok(false));
        repo.expect_insert().returning(|s| Ok(s.clone()));

        let service = SliderService::new(Arc::new(repo));
        let created = service.create(dto(4), &create_editor_user()).await.unwrap();

        assert!(created.is_active);
        assert_eq!(created.order_number, 4);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockSliderRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = SliderService::new(Arc::new(repo));
        let result = service.delete(Uuid::now_v7()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
