use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::contact_forms::dtos::{ContactFormResponseDto, CreateContactFormDto};
use crate::features::contact_forms::models::ContactForm;
use crate::features::contact_forms::repositories::ContactFormRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct ContactFormService {
    forms: Arc<dyn ContactFormRepository>,
}

impl ContactFormService {
    pub fn new(forms: Arc<dyn ContactFormRepository>) -> Self {
        Self { forms }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<ContactFormResponseDto>, Meta)> {
        let (forms, total) = self.forms.list(query).await?;
        let items = forms.into_iter().map(ContactFormResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<ContactFormResponseDto> {
        self.find(id).await.map(ContactFormResponseDto::from)
    }

    /// Store an anonymous submission. New messages start unread.
    pub async fn submit(&self, dto: CreateContactFormDto) -> Result<ContactFormResponseDto> {
        let form = ContactForm {
            id: Uuid::now_v7(),
            full_name: dto.full_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            phone: dto.phone.map(|p| p.trim().to_string()),
            subject: dto.subject.trim().to_string(),
            message: dto.message,
            is_read: false,
            is_active: true,
            audit: AuditTrail::created(None),
        };

        let created = self.forms.insert(&form).await?;
        tracing::info!("Contact form {} submitted", created.id);

        Ok(created.into())
    }

    pub async fn mark_read(
        &self,
        id: Uuid,
        is_read: bool,
        actor: &AuthenticatedUser,
    ) -> Result<ContactFormResponseDto> {
        let mut form = self.find(id).await?;
        form.is_read = is_read;
        form.audit.touch(actor.actor());

        let updated = self.forms.update(&form).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.forms.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<ContactForm> {
        self.forms.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Contact form with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contact_forms::repositories::MockContactFormRepository;
    use crate::shared::test_helpers::create_editor_user;

    fn submission() -> CreateContactFormDto {
        CreateContactFormDto {
            full_name: "  Ayu Lestari ".to_string(),
            email: "Ayu@Example.COM".to_string(),
            phone: None,
            subject: "Deposit".to_string(),
            message: "Do you need a deposit for drones?".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_is_anonymous_and_unread() {
        let mut repo = MockContactFormRepository::new();
        repo.expect_insert()
            .withf(|f| {
                !f.is_read
                    && f.audit.created_by.is_none()
                    && f.full_name == "Ayu Lestari"
                    && f.email == "ayu@example.com"
            })
            .returning(|f| Ok(f.clone()));

        let service = ContactFormService::new(Arc::new(repo));
        let created = service.submit(submission()).await.unwrap();

        assert!(!created.is_read);
        assert!(created.audit.created_by.is_none());
    }

    #[tokio::test]
    async fn test_mark_read_stamps_editor() {
        let form = ContactForm {
            id: Uuid::now_v7(),
            full_name: "Ayu Lestari".to_string(),
            email: "ayu@example.com".to_string(),
            phone: None,
            subject: "Deposit".to_string(),
            message: "Hello".to_string(),
            is_read: false,
            is_active: true,
            audit: AuditTrail::created(None),
        };
        let id = form.id;
        let editor = create_editor_user();
        let editor_id = editor.user_id;

        let mut repo = MockContactFormRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(form.clone())));
        repo.expect_update()
            .withf(move |f| f.is_read && f.audit.modified_by == Some(editor_id))
            .returning(|f| Ok(f.clone()));

        let service = ContactFormService::new(Arc::new(repo));
        let updated = service.mark_read(id, true, &editor).await.unwrap();

        assert!(updated.is_read);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockContactFormRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = ContactFormService::new(Arc::new(repo));
        let result = service.delete(Uuid::now_v7()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
