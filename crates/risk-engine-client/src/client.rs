use std::time::Duration;

use reqwest::Client;
use tokio::time::sleep;
use tracing::instrument;

use crate::types::{AuditRequest, EngineError, Verdict};

const AUDIT_PATH: &str = "/api/v1/audit";

/// HTTP client for the remote risk-evaluation engine.
///
/// One operation: submit an `AuditRequest`, receive a `Verdict` or a
/// failure. Transport-level timeouts are retried with a short linear
/// backoff; everything else surfaces on the first attempt.
pub struct EngineClient {
    client: Client,
    base_url: String,
    max_retries: u32,
}

impl EngineClient {
    pub fn new(base_url: &str, timeout_ms: u64, max_retries: u32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries,
        }
    }

    fn audit_url(&self) -> String {
        format!("{}{}", self.base_url, AUDIT_PATH)
    }

    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    pub async fn audit(&self, request: &AuditRequest) -> Result<Verdict, EngineError> {
        let mut attempt = 0u32;
        loop {
            let send_result = self
                .client
                .post(self.audit_url())
                .json(request)
                .send()
                .await;

            match send_result {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(EngineError::HttpStatus {
                            status: status.as_u16(),
                            body,
                        });
                    }

                    let body = response
                        .text()
                        .await
                        .map_err(|e| EngineError::Transport(e.to_string()))?;
                    let verdict: Verdict = serde_json::from_str(&body)?;
                    return Ok(verdict);
                }
                Err(e) => {
                    if e.is_timeout() {
                        if attempt < self.max_retries {
                            attempt += 1;
                            sleep(Duration::from_millis(150 * u64::from(attempt))).await;
                            continue;
                        }
                        return Err(EngineError::Timeout);
                    }
                    return Err(EngineError::Transport(e.to_string()));
                }
            }
        }
    }
}
