use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Image-Charts did not respond within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Non-2xx answer; carries the joined validation messages or the error code.
    #[error("{0}")]
    RemoteValidation(String),

    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[source] InfrastructureError),
}

impl From<InfrastructureError> for ApplicationError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Timeout(timeout_ms) => ApplicationError::Timeout { timeout_ms },
            other => ApplicationError::InfrastructureError(other),
        }
    }
}
