//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain-text password every factory user is created with unless overridden.
pub const DEFAULT_PASSWORD: &str = "password123";

/// Hashes with the smallest Argon2id parameters. The parameters are encoded in the
/// hash, so verification with default settings still succeeds.
fn hash_password(password: &str) -> Result<String, DbErr> {
    let params = Params::new(
        Params::MIN_M_COST,
        Params::MIN_T_COST,
        Params::MIN_P_COST,
        None,
    )
    .map_err(|e| DbErr::Custom(e.to_string()))?;
    let salt = SaltString::generate(&mut OsRng);

    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(e.to_string()))
}

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .email("ana@example.com")
///     .role("host")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    avatar: String,
    name: String,
    email: String,
    password: String,
    role: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - avatar: `"1"`
    /// - name: `"User {id}"`
    /// - email: `"user{id}@example.com"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - role: `"guest"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            avatar: "1".to_string(),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password: DEFAULT_PASSWORD.to_string(),
            role: "guest".to_string(),
        }
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the plain-text password; it is hashed on `build()`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the role, either `"host"` or `"guest"`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// The password is hashed with minimal Argon2id parameters to keep tests fast.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Hashing or database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let password = hash_password(&self.password)?;

        entity::user::ActiveModel {
            avatar: ActiveValue::Set(self.avatar),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(password),
            role: ActiveValue::Set(self.role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with the `host` role.
pub async fn create_host(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("host").build().await
}

/// Creates a user with the `guest` role.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role("guest").build().await
}
