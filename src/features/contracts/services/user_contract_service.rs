use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::contracts::dtos::{
    CreateUserContractDto, UpdateUserContractDto, UserContractResponseDto,
};
use crate::features::contracts::models::UserContract;
use crate::features::contracts::repositories::{ContractRepository, UserContractRepository};
use crate::features::contracts::services::contract_service;
use crate::features::users::repositories::UserRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

/// Contract acceptances recorded on behalf of users
pub struct UserContractService {
    user_contracts: Arc<dyn UserContractRepository>,
    contracts: Arc<dyn ContractRepository>,
    users: Arc<dyn UserRepository>,
}

impl UserContractService {
    pub fn new(
        user_contracts: Arc<dyn UserContractRepository>,
        contracts: Arc<dyn ContractRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            user_contracts,
            contracts,
            users,
        }
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<UserContractResponseDto>, Meta)> {
        self.ensure_user(user_id).await?;

        let (rows, total) = self.user_contracts.list_by_user(user_id, query).await?;
        let items = rows.into_iter().map(UserContractResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<UserContractResponseDto> {
        self.find(id).await.map(UserContractResponseDto::from)
    }

    /// Record acceptance with `accepted_at` = now
    pub async fn create(
        &self,
        user_id: Uuid,
        dto: CreateUserContractDto,
        actor: &AuthenticatedUser,
    ) -> Result<UserContractResponseDto> {
        self.ensure_user(user_id).await?;
        self.ensure_contract(dto.contract_id).await?;
        self.check_pair(user_id, dto.contract_id, None).await?;

        let user_contract = UserContract {
            id: Uuid::now_v7(),
            user_id,
            contract_id: dto.contract_id,
            accepted_at: Utc::now(),
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.user_contracts.insert(&user_contract).await?;
        tracing::info!(
            "User {} accepted contract {}",
            created.user_id,
            created.contract_id
        );

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateUserContractDto,
        actor: &AuthenticatedUser,
    ) -> Result<UserContractResponseDto> {
        let mut user_contract = self.find(id).await?;

        if let Some(contract_id) = dto.contract_id {
            if contract_id != user_contract.contract_id {
                self.ensure_contract(contract_id).await?;
                self.check_pair(user_contract.user_id, contract_id, Some(id))
                    .await?;
                user_contract.contract_id = contract_id;
                user_contract.accepted_at = Utc::now();
            }
        }
        if let Some(is_active) = dto.is_active {
            user_contract.is_active = is_active;
        }

        user_contract.audit.touch(actor.actor());
        let updated = self.user_contracts.update(&user_contract).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.user_contracts.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<UserContract> {
        self.user_contracts
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn ensure_user(&self, user_id: Uuid) -> Result<()> {
        match self.users.find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            ))),
        }
    }

    async fn ensure_contract(&self, contract_id: Uuid) -> Result<()> {
        match self.contracts.find_by_id(contract_id).await? {
            Some(_) => Ok(()),
            None => Err(contract_service::not_found(contract_id)),
        }
    }

    async fn check_pair(
        &self,
        user_id: Uuid,
        contract_id: Uuid,
        exclude: Option<Uuid>,
    ) -> Result<()> {
        if self
            .user_contracts
            .exists_for(user_id, contract_id, exclude)
            .await?
        {
            return Err(AppError::Conflict(
                "User has already accepted this contract".to_string(),
            ));
        }
        Ok(())
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User contract with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::contracts::models::Contract;
    use crate::features::contracts::repositories::{
        MockContractRepository, MockUserContractRepository,
    };
    use crate::features::users::models::User;
    use crate::features::users::repositories::MockUserRepository;
    use crate::shared::test_helpers::create_admin_user;

    fn user(id: Uuid) -> User {
        User {
            id,
            email: "renter@example.com".to_string(),
            first_name: "Ren".to_string(),
            last_name: "Ter".to_string(),
            phone: None,
            password_hash: "hash".to_string(),
            role: "customer".to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    fn contract(id: Uuid) -> Contract {
        Contract {
            id,
            title: "Rental terms".to_string(),
            code: "RENTAL_TERMS".to_string(),
            content: "text".to_string(),
            version: 1,
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    fn users_with(found: bool) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(move |id| Ok(found.then(|| user(id))));
        users
    }

    fn contracts_with(found: bool) -> MockContractRepository {
        let mut contracts = MockContractRepository::new();
        contracts
            .expect_find_by_id()
            .returning(move |id| Ok(found.then(|| contract(id))));
        contracts
    }

    #[tokio::test]
    async fn test_accept_sets_accepted_at_now() {
        let before = Utc::now();
        let mut repo = MockUserContractRepository::new();
        repo.expect_exists_for().returning(|_, _, _| Ok(false));
        repo.expect_insert().returning(|uc| Ok(uc.clone()));

        let service = UserContractService::new(
            Arc::new(repo),
            Arc::new(contracts_with(true)),
            Arc::new(users_with(true)),
        );
        let user_id = Uuid::now_v7();
        let contract_id = Uuid::now_v7();

        let created = service
            .create(
                user_id,
                CreateUserContractDto {
                    contract_id,
                    is_active: None,
                },
                &create_admin_user(),
            )
            .await
            .unwrap();

        assert_eq!(created.user_id, user_id);
        assert_eq!(created.contract_id, contract_id);
        assert!(created.accepted_at >= before);
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let mut repo = MockUserContractRepository::new();
        repo.expect_insert().never();

        let service = UserContractService::new(
            Arc::new(repo),
            Arc::new(MockContractRepository::new()),
            Arc::new(users_with(false)),
        );

        let result = service
            .create(
                Uuid::now_v7(),
                CreateUserContractDto {
                    contract_id: Uuid::now_v7(),
                    is_active: None,
                },
                &create_admin_user(),
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.starts_with("User")));
    }

    #[tokio::test]
    async fn test_missing_contract_is_not_found() {
        let mut repo = MockUserContractRepository::new();
        repo.expect_insert().never();

        let service = UserContractService::new(
            Arc::new(repo),
            Arc::new(contracts_with(false)),
            Arc::new(users_with(true)),
        );

        let result = service
            .create(
                Uuid::now_v7(),
                CreateUserContractDto {
                    contract_id: Uuid::now_v7(),
                    is_active: None,
                },
                &create_admin_user(),
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.starts_with("Contract")));
    }

    #[tokio::test]
    async fn test_duplicate_acceptance_is_conflict() {
        let mut repo = MockUserContractRepository::new();
        repo.expect_exists_for().returning(|_, _, _| Ok(true));
        repo.expect_insert().never();

        let service = UserContractService::new(
            Arc::new(repo),
            Arc::new(contracts_with(true)),
            Arc::new(users_with(true)),
        );

        let result = service
            .create(
                Uuid::now_v7(),
                CreateUserContractDto {
                    contract_id: Uuid::now_v7(),
                    is_active: None,
                },
                &create_admin_user(),
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
