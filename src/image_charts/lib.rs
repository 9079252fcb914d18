//! Client for the [Image-Charts](https://image-charts.com) rendering service.
//!
//! Chart parameters are collected on an [`ImageCharts`] builder and turned
//! into a canonical, optionally signed URL. The chart can then be fetched as
//! raw bytes, an in-memory image, a data URI or a file.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::chart_parameters::{is_known_parameter, CHART_PARAMETERS};
pub use application::error::ApplicationError;
pub use application::image_charts::ImageCharts;
pub use domain::chart_format::ChartFormat;
pub use domain::connection::{ConnectionSettings, ImageChartsConfig};
pub use domain::error::DomainError;
pub use domain::file_storage_trait::FileStorage;
pub use domain::image_codec_trait::ImageCodec;
pub use domain::transport_trait::{Transport, TransportResponse};
pub use infrastructure::error::InfrastructureError;
