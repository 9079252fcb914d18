pub mod error;
pub mod file_storage;
pub mod image_codec;
pub mod reqwest_transport;
