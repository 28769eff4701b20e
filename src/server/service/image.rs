//! Storage for uploaded listing images.
//!
//! Images are kept on local disk and served statically, or uploaded to an S3 bucket
//! when one is configured. Storage happens before the listing is written, so callers
//! discard the stored image if the listing write fails afterwards.

use std::path::PathBuf;

use axum::body::Bytes;

use crate::server::error::{image::ImageError, AppError};

/// Server-relative path under which locally stored images are served.
pub const PUBLIC_IMAGE_PATH: &str = "uploads/images";

/// Image file received with a listing.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub bytes: Bytes,
}

/// Maps an accepted image content type to the stored file extension.
///
/// # Returns
/// - `Some(&str)` - Extension for PNG, JPEG or WebP
/// - `None` - Content type is not an accepted image type
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpeg"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

#[derive(Clone)]
pub enum ImageStorage {
    /// Files written to `dir`, referenced as `{public_prefix}/{file}`.
    Local { dir: PathBuf, public_prefix: String },
    /// Objects uploaded to `bucket`, referenced by their public URL.
    #[cfg(feature = "s3")]
    S3 {
        client: aws_sdk_s3::Client,
        bucket: String,
        region: String,
    },
}

impl ImageStorage {
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        Self::Local {
            dir: dir.into(),
            public_prefix: PUBLIC_IMAGE_PATH.to_string(),
        }
    }

    /// Stores an image under a fresh `<uuid>.<ext>` name.
    ///
    /// # Arguments
    /// - `upload` - Image bytes and content type; the type must be accepted by
    ///   [`extension_for`]
    ///
    /// # Returns
    /// - `Ok(String)` - Reference to store on the listing (path or URL)
    /// - `Err(AppError::Validation)` - Content type is not an accepted image type
    /// - `Err(AppError::ImageErr)` - Writing the image failed
    pub async fn store(&self, upload: &ImageUpload) -> Result<String, AppError> {
        let extension = extension_for(&upload.content_type).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported image type '{}'.",
                upload.content_type
            ))
        })?;
        let file_name = format!("{}.{}", uuid::Uuid::new_v4(), extension);

        match self {
            Self::Local { dir, public_prefix } => {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(ImageError::from)?;
                tokio::fs::write(dir.join(&file_name), &upload.bytes)
                    .await
                    .map_err(ImageError::from)?;

                Ok(format!("{}/{}", public_prefix, file_name))
            }
            #[cfg(feature = "s3")]
            Self::S3 {
                client,
                bucket,
                region,
            } => {
                let key = format!("{}/{}", PUBLIC_IMAGE_PATH, file_name);

                client
                    .put_object()
                    .bucket(bucket)
                    .key(&key)
                    .body(aws_sdk_s3::primitives::ByteStream::from(upload.bytes.to_vec()))
                    .content_type(&upload.content_type)
                    .send()
                    .await
                    .map_err(|e| ImageError::Remote(e.to_string()))?;

                Ok(format!("https://{}.s3.{}.amazonaws.com/{}", bucket, region, key))
            }
        }
    }

    /// Removes a previously stored image. Failures are logged and otherwise ignored.
    ///
    /// # Arguments
    /// - `stored` - Reference returned by [`ImageStorage::store`]
    pub async fn discard(&self, stored: &str) {
        if let Err(e) = self.remove(stored).await {
            tracing::warn!("Failed to discard stored image {}: {}", stored, e);
        }
    }

    async fn remove(&self, stored: &str) -> Result<(), ImageError> {
        match self {
            Self::Local { dir, public_prefix } => {
                let file_name = stored
                    .strip_prefix(public_prefix.as_str())
                    .map(|rest| rest.trim_start_matches('/'))
                    .unwrap_or(stored);
                tokio::fs::remove_file(dir.join(file_name)).await?;
                Ok(())
            }
            #[cfg(feature = "s3")]
            Self::S3 { client, bucket, .. } => {
                let key = stored
                    .split_once(".amazonaws.com/")
                    .map(|(_, key)| key)
                    .unwrap_or(stored);

                client
                    .delete_object()
                    .bucket(bucket)
                    .key(key)
                    .send()
                    .await
                    .map_err(|e| ImageError::Remote(e.to_string()))?;
                Ok(())
            }
        }
    }
}
