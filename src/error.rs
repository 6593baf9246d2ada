//! Error types for the image pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Image larger than {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("Empty response body")]
    EmptyBody,

    #[error("Decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Decode task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Cancelled")]
    Cancelled,
}
