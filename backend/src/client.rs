use std::{fmt::Debug, num::NonZeroU32, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;

use crate::metrics::RequestMetrics;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status error: {0}")]
    Status(StatusCode),

    #[error("Record not found")]
    NotFound,

    #[error("Decoding backend response failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    /// Transport failures and server-side errors qualify for the single
    /// configured retry; client errors never do.
    fn is_retryable(&self) -> bool {
        match self {
            BackendError::Http(_) => true,
            BackendError::Status(status) => status.is_server_error(),
            _ => false,
        }
    }
}

/// A backend call either succeeds with the typed record or fails with a
/// [`BackendError`].
pub type BackendResponse<T> = Result<T, BackendError>;

/// Trait implemented by structures capable of performing raw HTTP requests
/// against the backend.
#[async_trait]
pub trait ApiRequest: Send + Sync + Debug {
    async fn request(&self, path: String) -> BackendResponse<Bytes>;
}

/// Concrete backend client: rate limited, counted, retried once.
#[derive(Debug)]
pub struct BackendClient {
    client: reqwest::Client,
    limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    base_url: String,
    pub metrics: Arc<RequestMetrics>,
}

impl BackendClient {
    pub fn new(base_url: String, rate_limit_per_second: NonZeroU32) -> Self {
        let q = Quota::per_second(rate_limit_per_second);

        Self {
            client: reqwest::Client::new(),
            limiter: RateLimiter::direct(q),
            base_url: base_url.trim_end_matches('/').to_string(),
            metrics: RequestMetrics::new("backend"),
        }
    }

    /// Spawn a task logging periodic metrics about requests.
    pub fn start_metrics_logging(&self) {
        let metrics = self.metrics.clone();
        tokio::spawn(async move { metrics.log_loop().await });
    }

    async fn execute(&self, path: &str) -> BackendResponse<Bytes> {
        self.limiter.until_ready().await;
        self.metrics.inc();

        let url = format!("{}{}", self.base_url, path);
        let res = self.client.get(&url).send().await?;
        match res.status() {
            StatusCode::OK => res.bytes().await.map_err(BackendError::Http),
            StatusCode::NOT_FOUND => Err(BackendError::NotFound),
            status => Err(BackendError::Status(status)),
        }
    }
}

#[async_trait]
impl ApiRequest for BackendClient {
    async fn request(&self, path: String) -> BackendResponse<Bytes> {
        match self.execute(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.is_retryable() => {
                warn!("backend request {} failed, retrying once: {}", path, e);
                self.execute(&path).await
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonzero_ext::nonzero;

    #[tokio::test]
    async fn request_propagates_transport_error() {
        // Nothing listens on this port; both attempts fail in transport.
        let client = BackendClient::new("http://127.0.0.1:9".to_string(), nonzero!(50u32));

        let res: BackendResponse<Bytes> = client.request("/summoners/euw/x".to_string()).await;

        assert!(matches!(res, Err(BackendError::Http(_))));
        assert_eq!(client.metrics.total(), 2);
    }
}
