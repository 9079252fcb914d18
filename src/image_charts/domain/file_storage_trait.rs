use crate::infrastructure::error::InfrastructureError;
use async_trait::async_trait;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError>;
}
