// Bounded retry with exponential backoff for upstream HTTP calls
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Distinguishes failures worth another attempt from final ones.
#[derive(Debug)]
pub enum RetryError {
    /// Connect/timeout errors, 5xx and 429 responses
    Retryable(anyhow::Error),
    /// Everything else, including unparseable payloads
    NonRetryable(anyhow::Error),
}

impl RetryError {
    pub fn into_inner(self) -> anyhow::Error {
        match self {
            RetryError::Retryable(err) | RetryError::NonRetryable(err) => err,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts after the first one.
    pub max_retries: u32,
    /// Delay before the first retry, doubled on each following one.
    pub base_delay_ms: u64,
    /// Random spread applied to each delay (0.25 = ±25%).
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_retries: 3,
            base_delay_ms: 500,
            jitter_factor: 0.25,
        }
    }
}

pub async fn with_retry<F, Fut, T>(func: F, config: &RetryConfig) -> Result<T, RetryError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, RetryError>>,
{
    let mut attempt = 0;
    loop {
        match func().await {
            Ok(result) => return Ok(result),
            Err(RetryError::Retryable(err)) if attempt < config.max_retries => {
                let delay = backoff_with_jitter(attempt, config);
                tracing::warn!(
                    "Retryable error: {:#}; retry {}/{} after {:?}",
                    err,
                    attempt + 1,
                    config.max_retries,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Exponential backoff `base * 2^attempt` with symmetric jitter.
fn backoff_with_jitter(attempt: u32, config: &RetryConfig) -> Duration {
    let base_delay = config.base_delay_ms.saturating_mul(2u64.saturating_pow(attempt));
    let jitter_range = (base_delay as f64 * config.jitter_factor) as u64;
    let jitter = if jitter_range == 0 {
        0
    } else {
        rand::thread_rng().gen_range(0..=jitter_range * 2) as i64 - jitter_range as i64
    };
    let delay_ms = (base_delay as i64 + jitter).max(0) as u64;
    Duration::from_millis(delay_ms)
}
