//! User domain models and parameters.

use std::fmt;

use crate::{
    model::auth::{AuthUserDto, RegisterDto},
    server::error::AppError,
};

/// Role chosen at registration. Never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Guest,
}

impl Role {
    /// Parses the stored or submitted role value.
    ///
    /// # Returns
    /// - `Some(Role)` - For `"host"` or `"guest"`
    /// - `None` - For anything else
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "host" => Some(Self::Host),
            "guest" => Some(Self::Guest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Avatar values a user may pick.
pub const AVATARS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub avatar: String,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string of the password.
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user
    /// - `Err(AppError::InternalError)` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| {
            AppError::InternalError(format!(
                "User {} has unknown role '{}'",
                entity.id, entity.role
            ))
        })?;

        Ok(Self {
            id: entity.id,
            avatar: entity.avatar,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password,
            role,
        })
    }

    pub fn is_host(&self) -> bool {
        self.role == Role::Host
    }

    pub fn into_dto(self) -> AuthUserDto {
        AuthUserDto {
            user_id: self.id,
            avatar: self.avatar,
            name: self.name,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }
}

/// Normalizes an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Parameters for registering a user.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub avatar: String,
    pub name: String,
    /// Already normalized.
    pub email: String,
    /// Plain-text password; hashed by the service.
    pub password: String,
    pub role: Role,
}

impl RegisterUserParams {
    /// Validates a registration request and converts it to parameters.
    ///
    /// Field checks run first, then the avatar, then the role, so each failure
    /// reports its own message.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParams)` - Valid request with a normalized email
    /// - `Err(AppError::Validation)` - Empty name, malformed email, short password,
    ///   unknown avatar or unknown role
    pub fn from_dto(mut dto: RegisterDto) -> Result<Self, AppError> {
        use validator::Validate;

        dto.email = normalize_email(&dto.email);
        dto.name = dto.name.trim().to_string();
        dto.validate()?;

        if !AVATARS.contains(&dto.avatar.as_str()) {
            return Err(AppError::Validation(
                "Invalid avatar value. It must be one of '1', '2', '3', '4', or '5'.".to_string(),
            ));
        }

        let role = Role::parse(&dto.role).ok_or_else(|| {
            AppError::Validation(
                "Invalid role value. It must be either 'host' or 'guest'.".to_string(),
            )
        })?;

        Ok(Self {
            avatar: dto.avatar,
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role,
        })
    }
}

/// Parameters for logging in.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}
