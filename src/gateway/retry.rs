use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use std::future::Future;
use tracing::warn;

/// Extracts HTTP status code from error message if present.
///
/// Looks for the pattern "HTTP {status_code}:" in the error message.
fn extract_status_code(msg: &str) -> Option<u16> {
    let prefix = "HTTP ";
    let start = msg.find(prefix)? + prefix.len();
    let end = msg[start..].find(':').unwrap_or(msg[start..].len());
    msg[start..start + end].trim().parse().ok()
}

/// Returns `true` for network errors without a status and for 5xx responses.
///
/// Client errors (4xx), decode failures and everything else are final.
fn should_retry(error: &AppError) -> bool {
    match error {
        AppError::NetworkError(msg) => match extract_status_code(msg) {
            Some(status_code) => status_code >= 500,
            None => true,
        },
        _ => false,
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl From<&AppConfig> for RetryConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            initial_delay_ms: config.retry_initial_delay_ms,
            max_delay_ms: config.retry_max_delay_ms,
        }
    }
}

/// Calculates exponential backoff delay in milliseconds.
///
/// Formula: `min(initial_delay * 2^attempt, max_delay)`
fn calculate_backoff(attempt: u32, config: &RetryConfig) -> u64 {
    let factor = 2_u64.checked_pow(attempt).unwrap_or(u64::MAX);
    config
        .initial_delay_ms
        .saturating_mul(factor)
        .min(config.max_delay_ms)
}

/// Runs `operation` until it succeeds, fails with a non-retryable error,
/// or exhausts `config.max_retries`.
pub(crate) async fn with_retry<T, F, Fut>(
    config: &RetryConfig,
    endpoint: &str,
    mut operation: F,
) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < config.max_retries && should_retry(&e) => {
                let delay_ms = calculate_backoff(attempt, config);
                warn!(
                    endpoint = endpoint,
                    attempt = attempt + 1,
                    max_attempts = config.max_retries + 1,
                    delay_ms = delay_ms,
                    error = %e,
                    "Retrying gateway request after error"
                );
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
