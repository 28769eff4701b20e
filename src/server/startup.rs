use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, service::image::ImageStorage};

/// Installs the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info` for this crate and
/// `tower_http`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stayhub=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or to run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Chooses where uploaded images are stored.
///
/// Uses the S3 bucket when `S3_BUCKET` is configured, the local upload directory
/// otherwise. The local directory is created if missing.
///
/// # Returns
/// - `Ok(ImageStorage)` - Ready storage backend
/// - `Err(AppError::ImageErr)` - Local upload directory could not be created
pub async fn setup_image_storage(config: &Config) -> Result<ImageStorage, AppError> {
    #[cfg(feature = "s3")]
    if let Some(bucket) = &config.s3_bucket {
        let aws = aws_config::load_from_env().await;
        let region = config
            .s3_region
            .clone()
            .or_else(|| aws.region().map(|r| r.to_string()))
            .unwrap_or_else(|| "us-east-1".to_string());

        tracing::info!("Storing images in S3 bucket {}", bucket);

        return Ok(ImageStorage::S3 {
            client: aws_sdk_s3::Client::new(&aws),
            bucket: bucket.clone(),
            region,
        });
    }

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(crate::server::error::image::ImageError::from)?;

    tracing::info!("Storing images in {}", config.upload_dir.display());

    Ok(ImageStorage::local(&config.upload_dir))
}
