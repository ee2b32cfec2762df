use insureflow_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("duplicate lead id: {0}")]
    DuplicateId(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Core,
    DuplicateId,
    NotFound,
    Snapshot,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::DuplicateId(_) => StoreErrorKind::DuplicateId,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::Snapshot(_) => StoreErrorKind::Snapshot,
        }
    }
}
