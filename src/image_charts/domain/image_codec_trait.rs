use crate::infrastructure::error::InfrastructureError;
use image::{DynamicImage, ImageFormat};

// 画像バイト列とメモリ上の画像の相互変換
#[cfg_attr(test, mockall::automock)]
pub trait ImageCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, InfrastructureError>;

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, InfrastructureError>;
}
