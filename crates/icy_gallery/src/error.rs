//! Error types for icy_gallery

use std::path::PathBuf;
use thiserror::Error;

pub type GalleryResult<T> = std::result::Result<T, GalleryError>;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// Server answered with a non-success status code
    #[error("http {status} ({url})")]
    Http { status: u16, url: String },

    #[error("connection error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image decode failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("request timed out after {secs}s ({url})")]
    Timeout { secs: u64, url: String },

    #[error("decoder task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The search was superseded by a newer one
    #[error("search cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid options file '{path}': {message}")]
    Config { path: PathBuf, message: String },
}

impl GalleryError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GalleryError::Cancelled)
    }
}
