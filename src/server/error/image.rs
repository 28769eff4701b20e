use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    /// Reading or writing the local upload directory failed.
    #[error("Image file operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Remote object storage rejected the request.
    #[error("Object storage request failed: {0}")]
    Remote(String),
}
