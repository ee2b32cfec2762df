use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("lead name is required")]
    EmptyName,
    #[error("invalid commission value: {0}")]
    InvalidCommission(f64),
    #[error("invalid lead status: {0}")]
    InvalidStatus(String),
    #[error("invalid policy type: {0}")]
    InvalidPolicy(String),
    #[error("invalid interaction kind: {0}")]
    InvalidInteractionKind(String),
}
