use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_UPLOAD_DIR: &str = "uploads/images";

/// Server configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// HS256 signing secret for session tokens.
    pub jwt_secret: String,
    /// ID of the user allowed to remove any listing or booking.
    pub admin_id: i32,
    pub port: u16,
    pub upload_dir: PathBuf,

    /// Remote image storage is used when a bucket is configured.
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is not set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let admin_id = parse_var("ADMIN_ID", require("ADMIN_ID")?)?;
        let port = match get("PORT") {
            Some(value) => parse_var("PORT", value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_KEY")?,
            admin_id,
            port,
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            s3_bucket: get("S3_BUCKET"),
            s3_region: get("S3_REGION"),
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
