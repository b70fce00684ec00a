//! Role-based authorization guards for the application.
//!
//! These guards extract the authenticated user and verify they have the required roles.
//!
//! Role hierarchy (from highest to lowest):
//! - admin: users, contracts, logistics, plus everything an editor can do
//! - editor: catalog, site content and contact form inbox
//! - customer: storefront account, no admin surface access

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn authenticated(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Guard for checking if user is admin.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

/// Guard for checking if user has editor level access.
///
/// Allows users with "admin" or "editor" roles.
/// Use this for catalog and content management operations.
pub struct RequireEditor(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireEditor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.has_editor_access() {
            return Err(AppError::Forbidden("Editor access required".to_string()));
        }

        Ok(RequireEditor(user.clone()))
    }
}
