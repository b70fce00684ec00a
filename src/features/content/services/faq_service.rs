use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::content::dtos::{CreateFaqDto, FaqResponseDto, UpdateFaqDto};
use crate::features::content::models::Faq;
use crate::features::content::repositories::FaqRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct FaqService {
    faqs: Arc<dyn FaqRepository>,
}

impl FaqService {
    pub fn new(faqs: Arc<dyn FaqRepository>) -> Self {
        Self { faqs }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<FaqResponseDto>, Meta)> {
        let (faqs, total) = self.faqs.list(query).await?;
        let items = faqs.into_iter().map(FaqResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<FaqResponseDto> {
        self.find(id).await.map(FaqResponseDto::from)
    }

    pub async fn create(&self, dto: CreateFaqDto, actor: &AuthenticatedUser) -> Result<FaqResponseDto> {
        self.check_order_number(dto.order_number, None).await?;

        let faq = Faq {
            id: Uuid::now_v7(),
            question: dto.question.trim().to_string(),
            answer: dto.answer,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.faqs.insert(&faq).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateFaqDto,
        actor: &AuthenticatedUser,
    ) -> Result<FaqResponseDto> {
        let mut faq = self.find(id).await?;

        if let Some(order_number) = dto.order_number {
            if order_number != faq.order_number {
                self.check_order_number(order_number, Some(id)).await?;
                faq.order_number = order_number;
            }
        }
        if let Some(question) = dto.question {
            faq.question = question.trim().to_string();
        }
        if let Some(answer) = dto.answer {
            faq.answer = answer;
        }
        if let Some(is_active) = dto.is_active {
            faq.is_active = is_active;
        }

        faq.audit.touch(actor.actor());
        let updated = self.faqs.update(&faq).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.faqs.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Faq> {
        self.faqs.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_order_number(&self, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self.faqs.order_number_taken(order_number, exclude).await? {
            return Err(AppError::Conflict(format!(
                "FAQ order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("FAQ with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::content::repositories::MockFaqRepository;
    use crate::shared::test_helpers::create_editor_user;

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let mut repo = MockFaqRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = FaqService::new(Arc::new(repo));
        let result = service
            .update(Uuid::now_v7(), UpdateFaqDto::default(), &create_editor_user())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_moving_to_taken_order_is_conflict() {
        let faq = Faq {
            id: Uuid::now_v7(),
            question: "Do you deliver?".to_string(),
            answer: "Yes, within the city.".to_string(),
            order_number: 1,
            is_active: true,
            audit: AuditTrail::created(None),
        };
        let id = faq.id;

        let mut repo = MockFaqRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(faq.clone())));
        repo.expect_order_number_taken()
            .withf(move |order, exclude| *order == 2 && *exclude == Some(id))
            .returning(|_, _| Ok(true));
        repo.expect_update().never();

        let service = FaqService::new(Arc::new(repo));
        let dto = UpdateFaqDto {
            order_number: Some(2),
            ..Default::default()
        };

        let result = service.update(id, dto, &create_editor_user()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
