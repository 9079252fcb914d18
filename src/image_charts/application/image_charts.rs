use super::error::ApplicationError;
use super::response_decoder::decode_response;
use crate::domain::chart_format::ChartFormat;
use crate::domain::connection::{ConnectionSettings, ImageChartsConfig};
use crate::domain::file_storage_trait::FileStorage;
use crate::domain::image_codec_trait::ImageCodec;
use crate::domain::parameter_store::ParameterStore;
use crate::domain::query_encoder::encode_query;
use crate::domain::signer::sign;
use crate::domain::transport_trait::Transport;
use crate::infrastructure::file_storage::LocalFileStorage;
use crate::infrastructure::image_codec::DefaultImageCodec;
use crate::infrastructure::reqwest_transport::ReqwestTransport;
use image::{DynamicImage, ImageFormat};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Enterprise account id; its presence turns on request signing.
pub const ACCOUNT_PARAMETER: &str = "icac";
/// HMAC-SHA256 request signature, always the last query parameter.
pub const SIGNATURE_PARAMETER: &str = "ichm";

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds Image-Charts requests and turns the answer into a URL, an image,
/// a data URI or a file.
///
/// ```no_run
/// # async fn run() -> Result<(), image_charts::ApplicationError> {
/// let chart = image_charts::ImageCharts::new()
///     .cht("bvg")
///     .chs("300x300")
///     .chd("a:60,40");
///
/// println!("{}", chart.to_url()?);
/// println!("{}", chart.to_data_uri().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ImageCharts {
    connection: ConnectionSettings,
    query: ParameterStore,
    transport: Arc<dyn Transport>,
    codec: Arc<dyn ImageCodec>,
    file_storage: Arc<dyn FileStorage>,
}

impl ImageCharts {
    /// Free usage with the default connection settings.
    pub fn new() -> Self {
        Self::with_config(ImageChartsConfig::default())
    }

    /// Enterprise usage: requests carrying `icac` get signed with `secret`.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self::with_config(ImageChartsConfig {
            secret: Some(secret.into()),
            ..Default::default()
        })
    }

    pub fn with_config(config: ImageChartsConfig) -> Self {
        Self {
            connection: config.into(),
            query: ParameterStore::new(),
            transport: Arc::new(ReqwestTransport::new()),
            codec: Arc::new(DefaultImageCodec::new()),
            file_storage: Arc::new(LocalFileStorage::new()),
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_codec(mut self, codec: Arc<dyn ImageCodec>) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_file_storage(mut self, file_storage: Arc<dyn FileStorage>) -> Self {
        self.file_storage = file_storage;
        self
    }

    pub fn connection(&self) -> &ConnectionSettings {
        &self.connection
    }

    pub fn query(&self) -> &ParameterStore {
        &self.query
    }

    /// Sets any chart parameter. An existing key keeps its position.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.set(key, value);
        self
    }

    pub fn chart_format(&self) -> ChartFormat {
        ChartFormat::for_parameters(&self.query)
    }

    /// Full chart URL, signed when `icac` and a secret are both present.
    pub fn to_url(&self) -> Result<String, ApplicationError> {
        let mut query = encode_query(self.query.entries());

        if self.query.has(ACCOUNT_PARAMETER) {
            if let Some(secret) = self.connection.signing_secret() {
                let signature = sign(secret, &query)?;
                query.push('&');
                query.push_str(SIGNATURE_PARAMETER);
                query.push('=');
                query.push_str(&signature);
            }
        }

        Ok(format!(
            "{}://{}:{}{}?{}",
            self.connection.protocol,
            self.connection.host,
            self.connection.port,
            self.connection.pathname,
            query
        ))
    }

    pub fn user_agent(&self) -> String {
        match self.query.get(ACCOUNT_PARAMETER) {
            Some(account) => format!("{} ({})", USER_AGENT, account),
            None => USER_AGENT.to_string(),
        }
    }

    /// Requests the chart and returns the raw image bytes.
    pub async fn fetch(&self) -> Result<Vec<u8>, ApplicationError> {
        let url = self.to_url()?;
        let headers = vec![("User-Agent".to_string(), self.user_agent())];
        debug!(url = %url, timeout_ms = self.connection.timeout_ms, "requesting chart");

        let response = self
            .transport
            .http_get(&url, self.connection.timeout_ms, &headers)
            .await?;
        decode_response(response)
    }

    pub async fn to_image(&self) -> Result<DynamicImage, ApplicationError> {
        let bytes = self.fetch().await?;
        Ok(self.codec.decode(&bytes)?)
    }

    /// `data:image/<png|gif>;base64,...`. The payload is always PNG encoded;
    /// only the media type follows the animation parameter.
    pub async fn to_data_uri(&self) -> Result<String, ApplicationError> {
        let image = self.to_image().await?;
        let png = self.codec.encode(&image, ImageFormat::Png)?;
        Ok(format!(
            "data:image/{};base64,{}",
            self.chart_format().as_str(),
            base64::encode(png)
        ))
    }

    /// Writes the chart to `path` as gif when animated, png otherwise.
    pub async fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ApplicationError> {
        let path = path.as_ref();
        let format = self.chart_format();
        let image = self.to_image().await?;
        let bytes = self.codec.encode(&image, format.image_format())?;
        self.file_storage.save_image(path, &bytes).await?;
        info!(path = %path.display(), format = format.as_str(), "chart written");
        Ok(())
    }
}

impl Default for ImageCharts {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ImageCharts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCharts")
            .field("protocol", &self.connection.protocol)
            .field("host", &self.connection.host)
            .field("port", &self.connection.port)
            .field("pathname", &self.connection.pathname)
            .field("timeout_ms", &self.connection.timeout_ms)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
