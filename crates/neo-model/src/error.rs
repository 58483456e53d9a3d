use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid uNID: {0:?} (expected 'u' followed by 7 digits)")]
    InvalidUnid(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
