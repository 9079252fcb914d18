use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Request signing failed: {0}")]
    SigningError(String),
}
