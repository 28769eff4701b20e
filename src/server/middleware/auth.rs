//! Bearer-token authentication and permission checks.
//!
//! [`require_auth`] runs on protected routes and only establishes *who* is calling.
//! Handlers then use [`AuthGuard`] to re-read the caller from the database and check
//! what they may do.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    state::AppState,
};

/// Identity established from a verified bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

/// Rejects requests without a valid bearer token and records the caller.
///
/// `OPTIONS` requests pass through untouched. Every failure, whatever its cause,
/// produces the same 401 response.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let token = extract_bearer(req.headers()).ok_or(AuthError::AuthenticationFailed)?;

    let claims = state.tokens.verify(token, Utc::now()).map_err(|e| {
        tracing::debug!("Rejected bearer token: {}", e);
        AuthError::AuthenticationFailed
    })?;

    req.extensions_mut().insert(AuthUser {
        user_id: claims.user_id,
    });

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}

pub enum Permission {
    /// Caller must have the host role.
    Host,
    /// Caller must be the configured administrator.
    Admin,
    /// Caller must be the user with this ID.
    SelfOnly(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
    auth_user: AuthUser,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config, auth_user: AuthUser) -> Self {
        Self {
            db,
            config,
            auth_user,
        }
    }

    /// Loads the caller and checks every permission in order.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must all hold; may be empty
    ///
    /// # Returns
    /// - `Ok(User)` - The caller, holding every permission
    /// - `Err(AuthError::UserNotInDatabase)` - Token refers to a user that no longer exists
    /// - `Err(AuthError::AccessDenied)` - The first permission the caller lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.auth_user.user_id;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };
        let user = User::from_entity(user)?;

        for permission in permissions {
            match permission {
                Permission::Host => {
                    if !user.is_host() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "You are not authorized to create a listing, you must be a host."
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Admin => {
                    if user_id != self.config.admin_id {
                        return Err(
                            AuthError::AccessDenied(user_id, "Unauthorized.".to_string()).into(),
                        );
                    }
                }
                Permission::SelfOnly(id) => {
                    if user_id != *id {
                        return Err(
                            AuthError::AccessDenied(user_id, "Unauthorized.".to_string()).into(),
                        );
                    }
                }
            }
        }

        Ok(user)
    }
}
