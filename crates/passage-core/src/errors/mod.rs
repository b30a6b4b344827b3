//! Error taxonomy for the passage workspace.
//!
//! Each subsystem has its own enum; `PassageError` aggregates them so
//! cross-crate call chains can use a single `PassageResult`.

mod index_error;
mod provider_error;
mod storage_error;

pub use index_error::IndexError;
pub use provider_error::ProviderError;
pub use storage_error::StorageError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum PassageError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Workspace-wide result alias.
pub type PassageResult<T> = Result<T, PassageError>;
