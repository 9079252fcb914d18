use super::error::InfrastructureError;
use crate::domain::transport_trait::{Transport, TransportResponse};
use async_trait::async_trait;
use std::time::Duration;

/// [`Transport`] backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn map_reqwest_error(error: reqwest::Error, timeout_ms: u64) -> InfrastructureError {
    if error.is_timeout() {
        InfrastructureError::Timeout(timeout_ms)
    } else {
        InfrastructureError::ReqwestError(error)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn http_get(
        &self,
        url: &str,
        timeout_ms: u64,
        headers: &[(String, String)],
    ) -> Result<TransportResponse, InfrastructureError> {
        let mut request = self
            .client
            .get(url)
            .timeout(Duration::from_millis(timeout_ms));
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, timeout_ms))?;

        let status = response.status().as_u16();
        // 値が UTF-8 でないヘッダーは捨てる
        let response_headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(e, timeout_ms))?
            .to_vec();

        Ok(TransportResponse {
            status,
            headers: response_headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_http_get_returns_body_and_sends_headers() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/chart")
            .match_query(Matcher::UrlEncoded("cht".into(), "p".into()))
            .match_header("user-agent", "image_charts/test (acme)")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(vec![1u8, 2, 3])
            .create_async()
            .await;

        let transport = ReqwestTransport::new();
        let headers = vec![("User-Agent".to_string(), "image_charts/test (acme)".to_string())];
        let response = transport
            .http_get(&format!("{}/chart?cht=p", server.url()), 5000, &headers)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, vec![1, 2, 3]);
        assert_eq!(response.header("Content-Type"), Some("image/png"));
    }

    #[tokio::test]
    async fn test_http_get_keeps_error_status_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/chart")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_header("x-ic-error-code", "IC_MISSING_SIGNATURE")
            .create_async()
            .await;

        let transport = ReqwestTransport::new();
        let response = transport
            .http_get(&format!("{}/chart?icac=acme", server.url()), 5000, &[])
            .await
            .unwrap();

        assert_eq!(response.status, 400);
        assert!(!response.is_success());
        assert_eq!(response.header("x-ic-error-code"), Some("IC_MISSING_SIGNATURE"));
    }

    #[tokio::test]
    async fn test_http_get_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // 接続を受け付けるだけで応答しない
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let transport = ReqwestTransport::new();
        let result = transport
            .http_get(&format!("http://{}/chart", addr), 50, &[])
            .await;

        match result {
            Err(InfrastructureError::Timeout(ms)) => assert_eq!(ms, 50),
            other => panic!("Expected InfrastructureError::Timeout, got {:?}", other),
        }
    }
}
