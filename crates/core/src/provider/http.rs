//! reqwest-backed [`Transport`] with bounded retries.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::AppConfig;

use super::{ProviderError, Transport};

/// Status codes worth another attempt.
const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Maximum characters of an error body kept in [`ProviderError::HttpStatus`].
const ERROR_BODY_LIMIT: usize = 200;

/// HTTP transport issuing one request at a time.
pub struct HttpTransport {
    client: Client,
    retries: u32,
    backoff: Duration,
}

impl HttpTransport {
    /// Build a transport from the timeout, user agent and retry settings.
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            client,
            retries: config.retries,
            backoff: Duration::try_from_secs_f64(config.backoff.max(0.0))
                .unwrap_or(Duration::ZERO),
        })
    }

    /// Sleep before retry number `attempt` (1-based): `backoff * 2^(attempt-1)`.
    fn retry_delay(&self, attempt: u32) -> Duration {
        backoff_delay(self.backoff, attempt)
    }
}

fn backoff_delay(backoff: Duration, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    backoff.saturating_mul(1 << exponent)
}

fn is_retryable_status(status: u16) -> bool {
    RETRY_STATUSES.contains(&status)
}

fn map_request_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else if e.is_connect() {
        ProviderError::ConnectionFailed(e.to_string())
    } else {
        ProviderError::Client(e.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value, ProviderError> {
        let mut attempt = 0;

        loop {
            debug!(url = url, attempt = attempt, "Sending request");
            let result = self.client.get(url).query(params).send().await;

            match result {
                Ok(response) => {
                    let status = response.status();

                    if is_retryable_status(status.as_u16()) && attempt < self.retries {
                        attempt += 1;
                        let delay = self.retry_delay(attempt);
                        warn!(
                            url = url,
                            status = %status,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(ProviderError::HttpStatus {
                            status: status.as_u16(),
                            body: body.chars().take(ERROR_BODY_LIMIT).collect(),
                        });
                    }

                    let body = response.text().await.map_err(map_request_error)?;
                    return serde_json::from_str(&body)
                        .map_err(|e| ProviderError::InvalidJson(e.to_string()));
                }
                Err(e) if (e.is_timeout() || e.is_connect()) && attempt < self.retries => {
                    attempt += 1;
                    let delay = self.retry_delay(attempt);
                    warn!(
                        url = url,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying request"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(map_request_error(e)),
            }
        }
    }
}
