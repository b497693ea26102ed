use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Failed to {operation} {}: {source}", path.display())]
    SwatchError {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: InfrastructureError,
    },

    #[error("Failed to write {what} to {}: {source}", path.display())]
    OutputError {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: InfrastructureError,
    },

    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError),
}

impl ApplicationError {
    pub fn swatch(path: impl Into<PathBuf>, operation: &'static str, source: InfrastructureError) -> Self {
        Self::SwatchError {
            path: path.into(),
            operation,
            source,
        }
    }

    pub fn output(what: &'static str, path: impl Into<PathBuf>, source: InfrastructureError) -> Self {
        Self::OutputError {
            what,
            path: path.into(),
            source,
        }
    }
}
