pub mod chart_format;
pub mod connection;
pub mod error;
pub mod file_storage_trait;
pub mod image_codec_trait;
pub mod parameter_store;
pub mod query_encoder;
pub mod remote_error;
pub mod signer;
pub mod transport_trait;
