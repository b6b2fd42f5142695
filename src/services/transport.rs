// src/services/transport.rs
// DOCUMENTATION: HTTP transport seam
// PURPOSE: Perform one HTTP call and hand back raw bytes or a typed error

use std::future::Future;
use std::num::NonZeroU32;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Url};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::errors::PlacesError;

/// Cancellation and deadline for one client operation
/// DOCUMENTATION: Threaded through every call untouched; only the transport reacts to it
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    pub cancel: CancellationToken,
    pub deadline: Option<Instant>,
}

impl CallContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        CallContext {
            cancel: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }
}

/// Fully built HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Performs HTTP calls for the client
/// DOCUMENTATION: Non-2xx responses must surface as PlacesError::Upstream with the
/// status and body; the client passes them through unchanged
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        ctx: &CallContext,
        request: HttpRequest,
    ) -> impl Future<Output = Result<Vec<u8>, PlacesError>> + Send;
}

/// reqwest-backed transport
/// DOCUMENTATION: No retries and no caching. An optional governor limiter spaces calls
pub struct ReqwestTransport {
    client: Client,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PlacesError::Transport(format!("Client build failed: {}", e)))?;

        let limiter = config
            .max_qps
            .and_then(NonZeroU32::new)
            .map(|qps| RateLimiter::direct(Quota::per_second(qps)));

        Ok(Self { client, limiter })
    }

    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>, PlacesError> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("Places API request failed: {}", e);
            PlacesError::Transport(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(status.as_u16(), response.text().await);
            log::error!("Places API error {}: {}", status, body);
            return Err(PlacesError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| PlacesError::Transport(format!("Read failed: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

/// Body of a non-2xx response, empty (and logged) when it could not be read
fn error_body<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| {
        log::warn!("Places API error {}: failed to read response body: {}", status, e);
        String::new()
    })
}

impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        ctx: &CallContext,
        request: HttpRequest,
    ) -> Result<Vec<u8>, PlacesError> {
        let call = async {
            match ctx.deadline {
                Some(deadline) => tokio::time::timeout_at(deadline, self.send(request))
                    .await
                    .map_err(|_| PlacesError::Transport("deadline exceeded".to_string()))?,
                None => self.send(request).await,
            }
        };

        tokio::select! {
            _ = ctx.cancel.cancelled() => Err(PlacesError::Cancelled),
            result = call => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_keeps_text() {
        let body: Result<String, String> = Ok("quota exceeded".to_string());
        assert_eq!(error_body(429, body), "quota exceeded");
    }

    #[test]
    fn test_error_body_read_failure_is_empty() {
        let body: Result<String, String> = Err("connection reset".to_string());
        assert_eq!(error_body(502, body), "");
    }

    #[test]
    fn test_call_context_deadline() {
        assert!(CallContext::new().deadline.is_none());
        let ctx = CallContext::with_timeout(Duration::from_secs(5));
        assert!(ctx.deadline.is_some());
        assert!(!ctx.cancel.is_cancelled());
    }
}
