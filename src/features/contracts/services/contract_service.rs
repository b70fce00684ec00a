use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::contracts::dtos::{
    ContractResponseDto, CreateContractDto, UpdateContractDto,
};
use crate::features::contracts::models::Contract;
use crate::features::contracts::repositories::ContractRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

const INITIAL_VERSION: i32 = 1;

pub struct ContractService {
    contracts: Arc<dyn ContractRepository>,
}

impl ContractService {
    pub fn new(contracts: Arc<dyn ContractRepository>) -> Self {
        Self { contracts }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<ContractResponseDto>, Meta)> {
        let (contracts, total) = self.contracts.list(query).await?;
        let items = contracts.into_iter().map(ContractResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<ContractResponseDto> {
        self.find(id).await.map(ContractResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateContractDto,
        actor: &AuthenticatedUser,
    ) -> Result<ContractResponseDto> {
        self.check_code(&dto.code, None).await?;

        let contract = Contract {
            id: Uuid::now_v7(),
            title: dto.title.trim().to_string(),
            code: dto.code,
            content: dto.content,
            version: INITIAL_VERSION,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.contracts.insert(&contract).await?;
        tracing::info!("Contract {} ({}) created", created.id, created.code);

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateContractDto,
        actor: &AuthenticatedUser,
    ) -> Result<ContractResponseDto> {
        let mut contract = self.find(id).await?;

        if let Some(code) = dto.code {
            if code != contract.code {
                self.check_code(&code, Some(id)).await?;
                contract.code = code;
            }
        }
        if let Some(content) = dto.content {
            if content != contract.content {
                contract.content = content;
                contract.version += 1;
                tracing::info!(
                    "Contract {} content changed, now version {}",
                    contract.code,
                    contract.version
                );
            }
        }
        if let Some(title) = dto.title {
            contract.title = title.trim().to_string();
        }
        if let Some(is_active) = dto.is_active {
            contract.is_active = is_active;
        }

        contract.audit.touch(actor.actor());
        let updated = self.contracts.update(&contract).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.contracts.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Contract> {
        self.contracts.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    async fn check_code(&self, code: &str, exclude: Option<Uuid>) -> Result<()> {
        if self.contracts.code_taken(code, exclude).await? {
            return Err(AppError::Conflict(format!(
                "Contract with code '{}' already exists",
                code
            )));
        }
        Ok(())
    }
}

pub(crate) fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Contract with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contracts::repositories::MockContractRepository;
    use crate::shared::test_helpers::create_admin_user;

    fn existing() -> Contract {
        Contract {
            id: Uuid::now_v7(),
            title: "Rental terms".to_string(),
            code: "RENTAL_TERMS".to_string(),
            content: "v1 text".to_string(),
            version: 3,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    fn service_with(contract: Contract) -> ContractService {
        let mut repo = MockContractRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(contract.clone())));
        repo.expect_code_taken().never();
        repo.expect_update().returning(|c| Ok(c.clone()));
        ContractService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_starts_at_version_one() {
        let mut repo = MockContractRepository::new();
        repo.expect_code_taken().returning(|_, _| Ok(false));
        repo.expect_insert().returning(|c| Ok(c.clone()));

        let service = ContractService::new(Arc::new(repo));
        let dto = CreateContractDto {
            title: "Privacy notice".to_string(),
            code: "PRIVACY".to_string(),
            content: "We keep your data safe.".to_string(),
            is_active: None,
        };

        let created = service.create(dto, &create_admin_user()).await.unwrap();
        assert_eq!(created.version, 1);
    }

    #[tokio::test]
    async fn test_duplicate_code_is_conflict() {
        let mut repo = MockContractRepository::new();
        repo.expect_code_taken().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = ContractService::new(Arc::new(repo));
        let dto = CreateContractDto {
            title: "Privacy notice".to_string(),
            code: "PRIVACY".to_string(),
            content: "text".to_string(),
            is_active: None,
        };

        let result = service.create(dto, &create_admin_user()).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_content_change_bumps_version() {
        let contract = existing();
        let id = contract.id;

        let dto = UpdateContractDto {
            content: Some("v2 text".to_string()),
            ..Default::default()
        };
        let updated = service_with(contract)
            .update(id, dto, &create_admin_user())
            .await
            .unwrap();

        assert_eq!(updated.version, 4);
        assert_eq!(updated.content, "v2 text");
    }

    #[tokio::test]
    async fn test_same_content_keeps_version() {
        let contract = existing();
        let id = contract.id;

        let dto = UpdateContractDto {
            title: Some("Rental terms and conditions".to_string()),
            content: Some("v1 text".to_string()),
            code: Some("RENTAL_TERMS".to_string()),
            ..Default::default()
        };
        let updated = service_with(contract)
            .update(id, dto, &create_admin_user())
            .await
            .unwrap();

        assert_eq!(updated.version, 3);
        assert_eq!(updated.title, "Rental terms and conditions");
    }
}
