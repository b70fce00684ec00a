use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{AddressResponseDto, CreateAddressDto, UpdateAddressDto};
use crate::features::users::models::Address;
use crate::features::users::repositories::{AddressRepository, UserRepository};
use crate::shared::audit::AuditTrail;
use crate::shared::types::{ListQuery, Meta};

/// Addresses belonging to a user. A user has at most one default address.
pub struct AddressService {
    addresses: Arc<dyn AddressRepository>,
    users: Arc<dyn UserRepository>,
}

impl AddressService {
    pub fn new(addresses: Arc<dyn AddressRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { addresses, users }
    }

    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        query: &ListQuery,
    ) -> Result<(Vec<AddressResponseDto>, Meta)> {
        self.ensure_user(user_id).await?;

        let (addresses, total) = self.addresses.list_by_user(user_id, query).await?;
        let items = addresses.into_iter().map(AddressResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<AddressResponseDto> {
        self.find(id).await.map(AddressResponseDto::from)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        dto: CreateAddressDto,
        actor: &AuthenticatedUser,
    ) -> Result<AddressResponseDto> {
        self.ensure_user(user_id).await?;

        let address = Address {
            id: Uuid::now_v7(),
            user_id,
            title: dto.title.trim().to_string(),
            city: dto.city.trim().to_string(),
            district: dto.district.trim().to_string(),
            address_line: dto.address_line.trim().to_string(),
            postal_code: dto.postal_code,
            is_default: dto.is_default,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.addresses.insert(&address).await?;
        if created.is_default {
            self.addresses
                .clear_default(user_id, created.id, actor.actor())
                .await?;
        }

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateAddressDto,
        actor: &AuthenticatedUser,
    ) -> Result<AddressResponseDto> {
        let mut address = self.find(id).await?;

        if let Some(title) = dto.title {
            address.title = title.trim().to_string();
        }
        if let Some(city) = dto.city {
            address.city = city.trim().to_string();
        }
        if let Some(district) = dto.district {
            address.district = district.trim().to_string();
        }
        if let Some(address_line) = dto.address_line {
            address.address_line = address_line.trim().to_string();
        }
        if dto.postal_code.is_some() {
            address.postal_code = dto.postal_code;
        }
        if let Some(is_default) = dto.is_default {
            address.is_default = is_default;
        }
        if let Some(is_active) = dto.is_active {
            address.is_active = is_active;
        }

        address.audit.touch(actor.actor());
        let updated = self.addresses.update(&address).await?;

        if updated.is_default {
            let cleared = self
                .addresses
                .clear_default(updated.user_id, updated.id, actor.actor())
                .await?;
            if cleared > 0 {
                tracing::debug!(
                    "Address {} is now default for user {}, cleared {} previous",
                    updated.id,
                    updated.user_id,
                    cleared
                );
            }
        }

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.addresses.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Address> {
        self.addresses
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
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Address with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::User;
    use crate::features::users::repositories::{MockAddressRepository, MockUserRepository};
    use crate::shared::test_helpers::create_admin_user;
    use mockall::predicate::eq;

    fn user(id: Uuid) -> User {
        User {
            id,
            email: "owner@example.com".to_string(),
            first_name: "Owner".to_string(),
            last_name: "One".to_string(),
            phone: None,
            password_hash: "hash".to_string(),
            role: "customer".to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    fn create_dto(is_default: bool) -> CreateAddressDto {
        CreateAddressDto {
            title: "Home".to_string(),
            city: "Istanbul".to_string(),
            district: "Kadikoy".to_string(),
            address_line: "Moda Cd. 1".to_string(),
            postal_code: Some("34710".to_string()),
            is_default,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_create_for_missing_user_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        let mut addresses = MockAddressRepository::new();
        addresses.expect_insert().never();

        let service = AddressService::new(Arc::new(addresses), Arc::new(users));
        let result = service
            .create(Uuid::now_v7(), create_dto(false), &create_admin_user())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.starts_with("User")));
    }

    #[tokio::test]
    async fn test_create_default_clears_previous_default() {
        let owner_id = Uuid::now_v7();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .with(eq(owner_id))
            .returning(|id| Ok(Some(user(id))));

        let mut addresses = MockAddressRepository::new();
        addresses.expect_insert().returning(|a| Ok(a.clone()));
        addresses
            .expect_clear_default()
            .withf(move |uid, _, _| *uid == owner_id)
            .times(1)
            .returning(|_, _, _| Ok(1));

        let service = AddressService::new(Arc::new(addresses), Arc::new(users));
        let created = service
            .create(owner_id, create_dto(true), &create_admin_user())
            .await
            .unwrap();

        assert!(created.is_default);
        assert_eq!(created.user_id, owner_id);
    }

    #[tokio::test]
    async fn test_create_non_default_leaves_others_alone() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|id| Ok(Some(user(id))));
        let mut addresses = MockAddressRepository::new();
        addresses.expect_insert().returning(|a| Ok(a.clone()));
        addresses.expect_clear_default().never();

        let service = AddressService::new(Arc::new(addresses), Arc::new(users));
        let result = service
            .create(Uuid::now_v7(), create_dto(false), &create_admin_user())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let mut addresses = MockAddressRepository::new();
        addresses.expect_delete().returning(|_| Ok(false));

        let service = AddressService::new(Arc::new(addresses), Arc::new(MockUserRepository::new()));
        let result = service.delete(Uuid::now_v7()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
