use crate::infrastructure::error::InfrastructureError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Status, headers and body of a completed HTTP exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    // ヘッダー名は小文字で保持する
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the HTTP GET for a chart URL.
///
/// Implementations must report an expired `timeout_ms` as
/// [`InfrastructureError::Timeout`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn http_get(
        &self,
        url: &str,
        timeout_ms: u64,
        headers: &[(String, String)],
    ) -> Result<TransportResponse, InfrastructureError>;
}
