use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{
    AuthResponseDto, ChangePasswordDto, LoginRequestDto, RefreshTokenResponseDto,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::{PasswordService, TokenService};
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::models::User;
use crate::features::users::repositories::UserRepository;
use crate::features::users::services::normalize_email;

const TOKEN_TYPE: &str = "Bearer";

/// Service for authentication operations (login, refresh, password change)
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Login with email and password.
    ///
    /// Unknown email and wrong password produce the same 401 so callers
    /// cannot tell which addresses are registered.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let email = normalize_email(&dto.email);
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid_credentials)?;

        let password_valid = self
            .passwords
            .verify_blocking(dto.password, user.password_hash.clone())
            .await?;
        if !password_valid {
            tracing::info!("Failed login attempt for user {}", user.id);
            return Err(invalid_credentials());
        }

        if !user.is_active {
            return Err(AppError::Forbidden("Account is inactive".to_string()));
        }

        let issued = self.tokens.issue(&identity(&user))?;
        tracing::info!("User {} logged in", user.id);

        Ok(AuthResponseDto {
            access_token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: issued.expires_in,
            expires_at: issued.expires_at,
            user: user.into(),
        })
    }

    /// Issue a new token for the caller, re-reading role and status from the database
    pub async fn refresh(&self, caller: &AuthenticatedUser) -> Result<RefreshTokenResponseDto> {
        let user = self.active_user(caller).await?;
        let issued = self.tokens.issue(&identity(&user))?;

        Ok(RefreshTokenResponseDto {
            access_token: issued.token,
            token_type: TOKEN_TYPE.to_string(),
            expires_in: issued.expires_in,
            expires_at: issued.expires_at,
        })
    }

    /// Resolve a bearer token to the account as it is stored now.
    ///
    /// Role and status come from the users table, not from the token claims,
    /// so deactivation and role changes apply on the next request.
    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.tokens.validate(token)?;
        let user = self.active_user(&claims).await?;
        Ok(identity(&user))
    }

    /// Fresh access token for an already authenticated caller
    pub fn reissue(&self, user: &AuthenticatedUser) -> Result<String> {
        self.tokens.issue(user).map(|issued| issued.token)
    }

    pub async fn me(&self, caller: &AuthenticatedUser) -> Result<UserResponseDto> {
        self.active_user(caller).await.map(UserResponseDto::from)
    }

    pub async fn change_password(
        &self,
        caller: &AuthenticatedUser,
        dto: ChangePasswordDto,
    ) -> Result<()> {
        let mut user = self.active_user(caller).await?;

        let current_valid = self
            .passwords
            .verify_blocking(dto.current_password, user.password_hash.clone())
            .await?;
        if !current_valid {
            return Err(AppError::Auth("Current password is incorrect".to_string()));
        }

        user.password_hash = self.passwords.hash_blocking(dto.new_password).await?;
        user.audit.touch(caller.actor());
        self.users.update(&user).await?;

        tracing::info!("User {} changed their password", user.id);
        Ok(())
    }

    async fn active_user(&self, caller: &AuthenticatedUser) -> Result<User> {
        let user = self
            .users
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))?;

        if !user.is_active {
            return Err(AppError::Forbidden("Account is inactive".to_string()));
        }
        Ok(user)
    }
}

fn invalid_credentials() -> AppError {
    AppError::Auth("Invalid email or password".to_string())
}

fn identity(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: user.id,
        email: user.email.clone(),
        roles: vec![user.role.clone()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::repositories::MockUserRepository;
    use crate::shared::audit::AuditTrail;
    use crate::shared::test_helpers::test_auth_config;
    use uuid::Uuid;

    const PASSWORD: &str = "correct-password";

    fn passwords() -> Arc<PasswordService> {
        Arc::new(PasswordService::new(1_000))
    }

    fn tokens() -> Arc<TokenService> {
        Arc::new(TokenService::new(&test_auth_config()))
    }

    fn stored_user(is_active: bool) -> User {
        User {
            id: Uuid::now_v7(),
            email: "editor@example.com".to_string(),
            first_name: "Edit".to_string(),
            last_name: "Or".to_string(),
            phone: None,
            password_hash: PasswordService::new(1_000).hash(PASSWORD).unwrap(),
            role: "editor".to_string(),
            is_active,
            audit: AuditTrail::created(None),
        }
    }

    fn login_dto(email: &str, password: &str) -> LoginRequestDto {
        LoginRequestDto {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn service_with(repo: MockUserRepository) -> (AuthService, Arc<TokenService>) {
        let tokens = tokens();
        (
            AuthService::new(Arc::new(repo), passwords(), Arc::clone(&tokens)),
            tokens,
        )
    }

    #[tokio::test]
    async fn test_login_success_issues_valid_token() {
        let user = stored_user(true);
        let user_id = user.id;
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email: &str| email == "editor@example.com")
            .returning(move |_| Ok(Some(user.clone())));

        let (service, tokens) = service_with(repo);
        let response = service
            .login(login_dto(" Editor@Example.com ", PASSWORD))
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user.id, user_id);

        let identity = tokens.validate(&response.access_token).unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.roles, vec!["editor".to_string()]);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_401() {
        let user = stored_user(true);
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let (service, _) = service_with(repo);
        let result = service
            .login(login_dto("editor@example.com", "wrong-password"))
            .await;

        assert!(matches!(result, Err(AppError::Auth(msg)) if msg == "Invalid email or password"));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_401() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let (service, _) = service_with(repo);
        let result = service
            .login(login_dto("nobody@example.com", PASSWORD))
            .await;

        assert!(matches!(result, Err(AppError::Auth(msg)) if msg == "Invalid email or password"));
    }

    #[tokio::test]
    async fn test_login_inactive_user_is_403() {
        let user = stored_user(false);
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let (service, _) = service_with(repo);
        let result = service.login(login_dto("editor@example.com", PASSWORD)).await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_refresh_uses_current_role() {
        let mut user = stored_user(true);
        user.role = "admin".to_string();
        let caller = AuthenticatedUser {
            user_id: user.id,
            email: user.email.clone(),
            roles: vec!["editor".to_string()],
        };

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let (service, tokens) = service_with(repo);
        let refreshed = service.refresh(&caller).await.unwrap();

        let identity = tokens.validate(&refreshed.access_token).unwrap();
        assert!(identity.is_admin());
    }

    #[tokio::test]
    async fn test_authenticate_takes_role_from_database() {
        let user = stored_user(true);
        let stale = AuthenticatedUser {
            user_id: user.id,
            email: user.email.clone(),
            roles: vec!["admin".to_string()],
        };

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let (service, tokens) = service_with(repo);
        let token = tokens.issue(&stale).unwrap().token;
        let current = service.authenticate(&token).await.unwrap();

        assert_eq!(current.roles, vec!["editor".to_string()]);
        assert!(!current.is_admin());
    }

    #[tokio::test]
    async fn test_authenticate_inactive_is_403() {
        let user = stored_user(false);
        let caller = identity(&user);

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let (service, tokens) = service_with(repo);
        let token = tokens.issue(&caller).unwrap().token;

        let result = service.authenticate(&token).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_authenticate_deleted_account_is_401() {
        let caller = identity(&stored_user(true));

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let (service, tokens) = service_with(repo);
        let token = tokens.issue(&caller).unwrap().token;

        let result = service.authenticate(&token).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_change_password_requires_current() {
        let user = stored_user(true);
        let caller = AuthenticatedUser {
            user_id: user.id,
            email: user.email.clone(),
            roles: vec![user.role.clone()],
        };

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_update().never();

        let (service, _) = service_with(repo);
        let result = service
            .change_password(
                &caller,
                ChangePasswordDto {
                    current_password: "not-it".to_string(),
                    new_password: "brand-new-password".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_change_password_stores_new_hash() {
        let user = stored_user(true);
        let caller = AuthenticatedUser {
            user_id: user.id,
            email: user.email.clone(),
            roles: vec![user.role.clone()],
        };

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_update()
            .withf(|u: &User| {
                PasswordService::new(1_000)
                    .verify("brand-new-password", &u.password_hash)
                    .unwrap_or(false)
            })
            .times(1)
            .returning(|u| Ok(u.clone()));

        let (service, _) = service_with(repo);
        service
            .change_password(
                &caller,
                ChangePasswordDto {
                    current_password: PASSWORD.to_string(),
                    new_password: "brand-new-password".to_string(),
                },
            )
            .await
            .unwrap();
    }
}
