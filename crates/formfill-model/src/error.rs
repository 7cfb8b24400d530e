use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
