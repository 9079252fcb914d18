use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_HOST: &str = "image-charts.com";
pub const DEFAULT_PORT: u16 = 443;
pub const DEFAULT_PATHNAME: &str = "/chart";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Caller-supplied connection options. `None` keeps the default.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageChartsConfig {
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub pathname: Option<String>,
    pub secret: Option<String>,
    #[serde(rename = "timeoutMillis")]
    pub timeout_ms: Option<u64>,
}

impl ImageChartsConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_json_str(&raw)?)
    }

    /// `overrides` wins wherever it carries a value.
    pub fn merged_with(self, overrides: ImageChartsConfig) -> Self {
        Self {
            protocol: overrides.protocol.or(self.protocol),
            host: overrides.host.or(self.host),
            port: overrides.port.or(self.port),
            pathname: overrides.pathname.or(self.pathname),
            secret: overrides.secret.or(self.secret),
            timeout_ms: overrides.timeout_ms.or(self.timeout_ms),
        }
    }
}

/// Resolved connection settings, fixed once the builder is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub pathname: String,
    pub secret: Option<String>,
    pub timeout_ms: u64,
}

impl ConnectionSettings {
    /// Secret used for signing; an empty secret disables signing.
    pub fn signing_secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|secret| !secret.is_empty())
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        ImageChartsConfig::default().into()
    }
}

impl From<ImageChartsConfig> for ConnectionSettings {
    fn from(config: ImageChartsConfig) -> Self {
        Self {
            protocol: config.protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            host: config.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: config.port.unwrap_or(DEFAULT_PORT),
            pathname: config.pathname.unwrap_or_else(|| DEFAULT_PATHNAME.to_string()),
            secret: config.secret,
            timeout_ms: config.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }
}
