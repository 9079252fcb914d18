use super::error::InfrastructureError;
use crate::domain::image_codec_trait::ImageCodec;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// [`ImageCodec`] on top of the `image` crate.
pub struct DefaultImageCodec;

impl DefaultImageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultImageCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for DefaultImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, InfrastructureError> {
        // フォーマットはバイト列から推測する
        let reader = image::io::Reader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        reader.decode().map_err(InfrastructureError::ImageLibError)
    }

    fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, InfrastructureError> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, format)
            .map_err(InfrastructureError::ImageLibError)?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    // 2x2 のモノクロ PNG
    const PNG_2X2: &str = "iVBORw0KGgoAAAANSUhEUgAAAAIAAAACAQAAAABazTCJAAAADElEQVR42mM4wHAAAAMEAYEq5W5aAAAAAElFTkSuQmCC";

    #[test]
    fn test_decode_png() {
        let codec = DefaultImageCodec::new();
        let bytes = base64::decode(PNG_2X2).unwrap();
        let image = codec.decode(&bytes).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
    }

    #[test]
    fn test_encode_png_and_gif() {
        let codec = DefaultImageCodec::new();
        let image = codec.decode(&base64::decode(PNG_2X2).unwrap()).unwrap();

        let png = codec.encode(&image, ImageFormat::Png).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

        let gif = codec.encode(&image, ImageFormat::Gif).unwrap();
        assert!(gif.starts_with(b"GIF8"));
    }

    #[test]
    fn test_decode_invalid_image_data() {
        let codec = DefaultImageCodec::new();
        let result = codec.decode(&[1, 2, 3, 4]);
        match result {
            Err(InfrastructureError::ImageLibError(_)) => {}
            Err(InfrastructureError::IoError(_)) => {}
            other => panic!("Expected ImageLibError or IoError for invalid image data, got {:?}", other.map(|_| ())),
        }
    }
}
