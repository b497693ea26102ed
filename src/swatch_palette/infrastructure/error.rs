use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Failed to read {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory {}", path.display())]
    ListError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image encoding failed: {0}")]
    EncodeError(String),

    #[error("Underlying image library error")]
    ImageLibError(#[from] image::ImageError),

    #[error("Underlying I/O error")]
    IoError(#[from] std::io::Error),

    #[error("Template rendering failed")]
    TemplateError(#[from] tera::Error),

    #[error("JSON serialization failed")]
    SerializationError(#[from] serde_json::Error),

    #[error("Domain Error Wrapper: {0}")]
    DomainErrorWrapper(#[from] DomainError),
}
