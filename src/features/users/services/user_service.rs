use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::PasswordService;
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto, UserResponseDto};
use crate::features::users::models::User;
use crate::features::users::repositories::UserRepository;
use crate::shared::audit::AuditTrail;
use crate::shared::constants::ROLE_ADMIN;
use crate::shared::types::{ListQuery, Meta};

/// Account management for the admin panel
pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<PasswordService>) -> Self {
        Self { users, passwords }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<UserResponseDto>, Meta)> {
        let (users, total) = self.users.list(query).await?;
        let items = users.into_iter().map(UserResponseDto::from).collect();
        Ok((items, Meta::for_page(total, query)))
    }

    pub async fn get(&self, id: Uuid) -> Result<UserResponseDto> {
        self.find(id).await.map(UserResponseDto::from)
    }

    pub async fn create(
        &self,
        dto: CreateUserDto,
        actor: &AuthenticatedUser,
    ) -> Result<UserResponseDto> {
        let email = normalize_email(&dto.email);
        if self.users.email_taken(&email, None).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                email
            )));
        }

        let password_hash = self.passwords.hash_blocking(dto.password).await?;

        let user = User {
            id: Uuid::now_v7(),
            email,
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            phone: dto.phone,
            password_hash,
            role: dto.role,
            is_active: dto.is_active.unwrap_or(true),
            audit: AuditTrail::created(actor.actor()),
        };

        let created = self.users.insert(&user).await?;
        tracing::info!("User {} created by {}", created.id, actor.user_id);

        Ok(created.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpdateUserDto,
        actor: &AuthenticatedUser,
    ) -> Result<UserResponseDto> {
        let mut user = self.find(id).await?;

        if let Some(email) = dto.email {
            let email = normalize_email(&email);
            if email != user.email && self.users.email_taken(&email, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Email {} is already registered",
                    email
                )));
            }
            user.email = email;
        }
        if let Some(first_name) = dto.first_name {
            user.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = dto.last_name {
            user.last_name = last_name.trim().to_string();
        }
        if dto.phone.is_some() {
            user.phone = dto.phone;
        }
        if let Some(role) = dto.role {
            user.role = role;
        }
        if let Some(is_active) = dto.is_active {
            user.is_active = is_active;
        }
        if let Some(password) = dto.password {
            user.password_hash = self.passwords.hash_blocking(password).await?;
        }

        user.audit.touch(actor.actor());
        let updated = self.users.update(&user).await?;

        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid, actor: &AuthenticatedUser) -> Result<()> {
        if actor.user_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !self.users.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("User {} deleted by {}", id, actor.user_id);
        Ok(())
    }

    /// Create the first admin account when the users table is empty.
    ///
    /// Returns `true` when an account was created.
    pub async fn bootstrap_admin(&self, email: &str, password: &str) -> Result<bool> {
        if self.users.count().await? > 0 {
            return Ok(false);
        }

        let password_hash = self.passwords.hash_blocking(password.to_string()).await?;
        let user = User {
            id: Uuid::now_v7(),
            email: normalize_email(email),
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            phone: None,
            password_hash,
            role: ROLE_ADMIN.to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        };

        let created = self.users.insert(&user).await?;
        tracing::info!("Bootstrap admin {} created", created.email);

        Ok(true)
    }

    async fn find(&self, id: Uuid) -> Result<User> {
        self.users.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("User with id {} not found", id))
}

/// Emails are stored lowercased and trimmed
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::repositories::MockUserRepository;
    use crate::shared::test_helpers::create_admin_user;

    fn passwords() -> Arc<PasswordService> {
        Arc::new(PasswordService::new(1_000))
    }

    fn stored_user(email: &str) -> User {
        User {
            id: Uuid::now_v7(),
            email: email.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            phone: None,
            password_hash: "$pbkdf2-sha256$i=1000,l=32$c2FsdA$aGFzaA".to_string(),
            role: "editor".to_string(),
            is_active: true,
            audit: AuditTrail::created(None),
        }
    }

    fn create_dto(email: &str) -> CreateUserDto {
        CreateUserDto {
            email: email.to_string(),
            first_name: " Grace ".to_string(),
            last_name: "Hopper".to_string(),
            phone: None,
            password: "password-123".to_string(),
            role: "editor".to_string(),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_create_hashes_password_and_stamps_audit() {
        let admin = create_admin_user();
        let admin_id = admin.user_id;

        let mut repo = MockUserRepository::new();
        repo.expect_email_taken().returning(|_, _| Ok(false));
        repo.expect_insert()
            .withf(move |u: &User| {
                u.email == "grace@example.com"
                    && u.first_name == "Grace"
                    && u.password_hash.starts_with("$pbkdf2-sha256$")
                    && u.audit.created_by == Some(admin_id)
            })
            .returning(|u| Ok(u.clone()));

        let service = UserService::new(Arc::new(repo), passwords());
        let created = service
            .create(create_dto("Grace@Example.com"), &admin)
            .await
            .unwrap();

        assert_eq!(created.email, "grace@example.com");
        assert!(created.is_active);
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_conflict() {
        let mut repo = MockUserRepository::new();
        repo.expect_email_taken().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = UserService::new(Arc::new(repo), passwords());
        let result = service
            .create(create_dto("taken@example.com"), &create_admin_user())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repo), passwords());
        let result = service.get(Uuid::now_v7()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_touches_audit_and_rehashes_password() {
        let existing = stored_user("grace@example.com");
        let old_hash = existing.password_hash.clone();
        let admin = create_admin_user();
        let admin_id = admin.user_id;

        let mut repo = MockUserRepository::new();
        let found = existing.clone();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_update()
            .withf(move |u: &User| {
                u.role == "admin"
                    && u.password_hash != old_hash
                    && u.audit.modified_by == Some(admin_id)
                    && u.audit.modified_at.is_some()
            })
            .returning(|u| Ok(u.clone()));

        let service = UserService::new(Arc::new(repo), passwords());
        let dto = UpdateUserDto {
            role: Some("admin".to_string()),
            password: Some("new-password-456".to_string()),
            ..Default::default()
        };

        let updated = service.update(existing.id, dto, &admin).await.unwrap();
        assert_eq!(updated.role, "admin");
        assert_eq!(updated.modified_by, Some(admin_id));
    }

    #[tokio::test]
    async fn test_update_email_to_taken_is_conflict() {
        let existing = stored_user("grace@example.com");

        let mut repo = MockUserRepository::new();
        let found = existing.clone();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));
        repo.expect_email_taken().returning(|_, _| Ok(true));
        repo.expect_update().never();

        let service = UserService::new(Arc::new(repo), passwords());
        let dto = UpdateUserDto {
            email: Some("other@example.com".to_string()),
            ..Default::default()
        };

        let result = service
            .update(existing.id, dto, &create_admin_user())
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_self_is_rejected() {
        let admin = create_admin_user();
        let mut repo = MockUserRepository::new();
        repo.expect_delete().never();

        let service = UserService::new(Arc::new(repo), passwords());
        let result = service.delete(admin.user_id, &admin).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let service = UserService::new(Arc::new(repo), passwords());
        let result = service.delete(Uuid::now_v7(), &create_admin_user()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_bootstrap_admin_only_when_empty() {
        let mut repo = MockUserRepository::new();
        repo.expect_count().times(1).returning(|| Ok(0));
        repo.expect_insert()
            .withf(|u: &User| u.role == ROLE_ADMIN && u.audit.created_by.is_none())
            .times(1)
            .returning(|u| Ok(u.clone()));

        let service = UserService::new(Arc::new(repo), passwords());
        assert!(service
            .bootstrap_admin("root@example.com", "bootstrap-pass")
            .await
            .unwrap());

        let mut populated = MockUserRepository::new();
        populated.expect_count().returning(|| Ok(3));
        populated.expect_insert().never();

        let service = UserService::new(Arc::new(populated), passwords());
        assert!(!service
            .bootstrap_admin("root@example.com", "bootstrap-pass")
            .await
            .unwrap());
    }
}
