//! HTTP adapter for the transfer endpoint abstraction

use crate::error::{AppError, Result};
use crate::models::TestConfig;
use crate::transport::TransferEndpoint;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;

/// HTTP transfer endpoint speaking the `__down?bytes=N` / `__up` protocol.
///
/// Download and ping requests go to `{download_url}?bytes=N` (a ping is a
/// zero-byte download); uploads POST an octet-stream body to `upload_url`.
/// Each request carries the configured safety timeout, independent of any
/// phase budget, so a hung connection cannot stall a session.
pub struct HttpTransport {
    client: Client,
    download_url: String,
    upload_url: String,
}

impl HttpTransport {
    /// Build a transport from the test configuration
    pub fn new(config: &TestConfig) -> Result<Self> {
        Self::with_urls(
            &config.download_url,
            &config.upload_url,
            config.safety_timeout(),
        )
    }

    /// Build a transport against explicit endpoint URLs
    pub fn with_urls(
        download_url: &str,
        upload_url: &str,
        safety_timeout: Duration,
    ) -> Result<Self> {
        url::Url::parse(download_url)?;
        url::Url::parse(upload_url)?;

        let client = Client::builder()
            .timeout(safety_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            download_url: download_url.trim_end_matches('/').to_string(),
            upload_url: upload_url.to_string(),
        })
    }

    fn download_url_for(&self, bytes: u64) -> String {
        format!("{}?bytes={}", self.download_url, bytes)
    }
}

#[async_trait]
impl TransferEndpoint for HttpTransport {
    async fn ping(&self) -> Result<()> {
        let response = self
            .client
            .get(self.download_url_for(0))
            .send()
            .await?
            .error_for_status()?;

        // Drain whatever body exists so the round trip is complete
        let _ = response.bytes().await?;
        Ok(())
    }

    async fn download(&self, bytes: u64) -> Result<u64> {
        let response = self
            .client
            .get(self.download_url_for(bytes))
            .send()
            .await?
            .error_for_status()?;

        // Stream the body so arbitrarily large chunks never buffer whole
        let mut stream = response.bytes_stream();
        let mut received: u64 = 0;
        while let Some(chunk) = stream.next().await {
            received += chunk?.len() as u64;
        }

        if received == 0 && bytes > 0 {
            return Err(AppError::http_request(format!(
                "Endpoint returned an empty body for a {}-byte request",
                bytes
            )));
        }

        Ok(received)
    }

    async fn upload(&self, payload: Bytes) -> Result<()> {
        let response = self
            .client
            .post(&self.upload_url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(payload)
            .send()
            .await?
            .error_for_status()?;

        // Timing stops only after any response body is fully read
        let _ = response.bytes().await?;
        Ok(())
    }
}
