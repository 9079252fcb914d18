use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("No response within {0} ms")]
    Timeout(u64),

    #[error("HTTP transport error")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Underlying image library error")]
    ImageLibError(#[from] image::ImageError),

    #[error("Underlying I/O error")]
    IoError(#[from] std::io::Error),
}
