use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{normalize_email, LoginParams, RegisterUserParams, User},
    service::token::TokenService,
};

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user and signs them in.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Created user with a token
    /// - `Err(AppError::Conflict)` - A user with the same email already exists
    pub async fn register(&self, params: RegisterUserParams) -> Result<AuthSession, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::Conflict("User already exists.".to_string()));
        }

        let password_hash = hash_password(params.password).await?;

        let user = repo
            .create(
                params.avatar,
                params.name,
                params.email,
                password_hash,
                params.role,
            )
            .await?;
        let user = User::from_entity(user)?;

        tracing::info!("Registered {} {}", user.role, user.id);

        let token = self.tokens.issue(user.id, Utc::now())?;

        Ok(AuthSession { user, token })
    }

    /// Checks credentials and signs the user in.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Matching user with a token
    /// - `Err(AppError::NotFound)` - No user with that email
    /// - `Err(AuthError::PasswordMismatch)` - Wrong password
    pub async fn login(&self, params: LoginParams) -> Result<AuthSession, AppError> {
        let email = normalize_email(&params.email);

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AppError::NotFound("User not found.".to_string()));
        };
        let user = User::from_entity(user)?;

        if !verify_password(params.password, user.password_hash.clone()).await? {
            return Err(AuthError::PasswordMismatch(user.id).into());
        }

        let token = self.tokens.issue(user.id, Utc::now())?;

        Ok(AuthSession { user, token })
    }
}

/// Hashes a password with Argon2id and a fresh salt on the blocking pool.
async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
    .map_err(AppError::from)
}

/// Checks a password against a stored hash, using the parameters encoded in the hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::HashErr)` - The stored hash could not be parsed
async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password check task failed: {}", e)))?
    .map_err(AppError::from)
}
