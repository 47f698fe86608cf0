use crate::domain::export_service::ExportError;
use crate::storage::traits::StorageError;

/// Error taxonomy shared by the domain services.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Client-supplied data failed a precondition
    #[error("{0}")]
    Validation(String),
    /// A referenced course does not exist
    #[error("{0}")]
    NotFound(String),
    /// The write would break a uniqueness rule
    #[error("{0}")]
    Conflict(String),
    #[error("persistence failure: {0}")]
    Persistence(#[from] StorageError),
    #[error("export failure: {0}")]
    Export(#[from] ExportError),
}

pub type DomainResult<T> = Result<T, DomainError>;
