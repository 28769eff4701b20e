//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned for each request through
//! Axum's state extraction. Every field is cheap to clone.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{image::ImageStorage, token::TokenService},
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Configuration read at startup.
    pub config: Arc<Config>,

    /// Where uploaded listing images are written.
    pub images: ImageStorage,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates the application state.
    ///
    /// The token service is keyed with the configured JWT secret.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    /// - `images` - Image storage backend
    pub fn new(db: DatabaseConnection, config: Config, images: ImageStorage) -> Self {
        let tokens = TokenService::new(&config.jwt_secret);

        Self {
            db,
            config: Arc::new(config),
            images,
            tokens,
        }
    }
}
