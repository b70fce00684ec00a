use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::catalog::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::catalog::models::Brand;
use crate::features::catalog::repositories::BrandRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

pub struct BrandService {
    brands: Arc<dyn BrandRepository>,
}

impl BrandService {
    pub fn new(brands: Arc<dyn BrandRepository>) -> Self {
        Self { brands }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<BrandResponseDto>, Meta)> {
        let (brands, total) = self.brands.list(query).await?;
        let items = brands.into_iter().map(BrandResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<BrandResponseDto> {
        self.find(id).await.map(BrandResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateBrandDto,
        actor: &AuthenticatedUser,
    ) -> Result<BrandResponseDto> {
        let name = dto.name.trim().to_string();
        self.check_name(&name, None).await?;
        self.check_order_number(dto.order_number, None).await?;

        let brand = Brand {
            id: Uuid::now_v7(),
            name,
            logo_url: dto.logo_url,
            order_number: dto.order_number,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.brands.insert(&brand).await?;
        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateBrandDto,
        actor: &AuthenticatedUser,
    ) -> Result<BrandResponseDto> {
        let mut brand = self.find(id).await?;

        if let Some(name) = dto.name {
            let name = name.trim().to_string();
            if !name.eq_ignore_ascii_case(&brand.name) {
                self.check_name(&name, Some(id)).await?;
            }
            brand.name = name;
        }
        if let Some(order_number) = dto.order_number {
            if order_number != brand.order_number {
                self.check_order_number(order_number, Some(id)).await?;
                brand.order_number = order_number;
            }
        }
        if dto.logo_url.is_some() {
            brand.logo_url = dto.logo_url;
        }
        if let Some(is_active) = dto.is_active {
            brand.is_active = is_active;
        }

        brand.audit.touch(actor.actor());
        let updated = self.brands.update(&brand).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.brands.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Brand> {
        self.brands.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_name(&self, name: &str, exclude: Option<Uuid>) -> Result<()> {
        if self.brands.name_taken(name, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Brand '{}' already exists",
                name
            )));
        }
        Ok(())
    }

    async fn check_order_number(&self, order_number: i32, exclude: Option<Uuid>) -> Result<()> {
        if self.brands.order_number_taken(order_number, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Brand order number {} is already in use",
                order_number
            )));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Brand with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::catalog::repositories::MockBrandRepository;
    use crate::shared::test_helpers::create_editor_user;

    #[tokio::test]
    async fn test_duplicate_name_is_conflict() {
        let mut repo = MockBrandRepository::new();
        repo.expect_name_taken()
            .withf(|name: &str, _| name == "Acme")
            .returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = BrandService::new(Arc::new(repo));
        let dto = CreateBrandDto {
            name: " Acme ".to_string(),
            logo_url: None,
            order_number: 1,
            is_active: None,
        };

        let result = service.create(dto, &create_editor_user()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_rename_case_only_skips_name_check() {
        let existing = Brand {
            id: Uuid::now_v7(),
            name: "acme".to_string(),
            logo_url: None,
            order_number: 1,
            is_active: true,
            audit: AuditTrail::created(None),
        };
        let id = existing.id;

        let mut repo = MockBrandRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_name_taken().never();
        repo.expect_update().returning(|b| Ok(b.clone()));

        let service = BrandService::new(Arc::new(repo));
        let dto = UpdateBrandDto {
            name: Some("ACME".to_string()),
            ..Default::default()
        };

        let updated = service.update(id, dto, &create_editor_user()).await.unwrap();
        assert_eq!(updated.name, "ACME");
    }
}
