use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, Url};
use std::time::Duration;
use thiserror::Error;

use crate::models::FetchConfig;

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid image URL {0:?}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("image too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e.to_string())
    }
}

/// Source of remote image bytes
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Download the body at `url`. Failures are final; nothing is retried.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches images over HTTP(S) with `reqwest`
pub struct HttpImageFetcher {
    client: Client,
    max_bytes: usize,
}

impl HttpImageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            max_bytes: config.max_bytes,
        })
    }

    fn parse_url(url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(parsed),
            _ => Err(FetchError::InvalidUrl(url.to_string())),
        }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Self::parse_url(url)?;
        tracing::debug!(url = %url, "Fetching image");

        let mut response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Image fetch returned error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        if let Some(length) = response.content_length() {
            let length = length as usize;
            if length > self.max_bytes {
                return Err(FetchError::TooLarge {
                    size: length,
                    max: self.max_bytes,
                });
            }
        }

        // Content-Length may be absent or wrong, so the limit is enforced
        // while reading as well.
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(FetchError::TooLarge {
                    size: body.len() + chunk.len(),
                    max: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        tracing::debug!(url = %url, bytes = body.len(), "Image fetched");
        Ok(body)
    }
}
