use super::error::InfrastructureError;
use crate::domain::file_storage_trait::FileStorage;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        let mut file = File::create(path).await.map_err(InfrastructureError::IoError)?;
        file.write_all(data).await.map_err(InfrastructureError::IoError)?;
        file.flush().await.map_err(InfrastructureError::IoError)?;
        Ok(())
    }
}
