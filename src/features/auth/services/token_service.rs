use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// A freshly signed access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
    pub expires_at: DateTime<Utc>,
}

/// Issues and validates HS256 access tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    ttl_secs: i64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl_secs: config.access_token_ttl.as_secs() as i64,
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Sign a new access token for `user`
    pub fn issue(&self, user: &AuthenticatedUser) -> Result<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + ChronoDuration::seconds(self.ttl_secs);

        let claims = Claims {
            sub: user.user_id.to_string(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::now_v7().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign access token: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.ttl_secs,
            expires_at,
        })
    }

    /// Validate signature, algorithm, issuer, audience, nbf and exp
    pub fn validate(&self, token: &str) -> Result<AuthenticatedUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway_secs;
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Rejected access token: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => AppError::Auth("Token has expired".to_string()),
                ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
                    AppError::Auth("Token was not issued for this service".to_string())
                }
                _ => AppError::Auth("Invalid token".to_string()),
            }
        })?;

        let claims = token_data.claims;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Auth("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
            roles: claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_admin_user, test_auth_config};

    #[test]
    fn test_issue_then_validate() {
        let service = TokenService::new(&test_auth_config());
        let user = create_admin_user();

        let issued = service.issue(&user).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let decoded = service.validate(&issued.token).unwrap();
        assert_eq!(decoded, user);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_auth_config();
        let service = TokenService::new(&config);
        let past = Utc::now() - ChronoDuration::hours(2);
        let claims = Claims {
            sub: Uuid::now_v7().to_string(),
            email: "late@example.com".to_string(),
            roles: vec![],
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            iat: past.timestamp(),
            nbf: past.timestamp(),
            exp: (past + ChronoDuration::minutes(5)).timestamp(),
            jti: Uuid::now_v7().to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = service.validate(&token).unwrap_err();
        assert!(matches!(err, AppError::Auth(msg) if msg == "Token has expired"));
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let mut other = test_auth_config();
        other.audience = "some-other-app".to_string();
        let foreign = TokenService::new(&other).issue(&create_admin_user()).unwrap();

        let service = TokenService::new(&test_auth_config());
        assert!(matches!(
            service.validate(&foreign.token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let mut other = test_auth_config();
        other.jwt_secret = "a-completely-different-signing-secret".to_string();
        let forged = TokenService::new(&other).issue(&create_admin_user()).unwrap();

        let service = TokenService::new(&test_auth_config());
        assert!(service.validate(&forged.token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let service = TokenService::new(&test_auth_config());
        assert!(service.validate("not.a.jwt").is_err());
        assert!(service.validate("").is_err());
    }
}
