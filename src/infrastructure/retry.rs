//! Retry policy applied to idempotent backend calls

use std::future::Future;
use std::time::Duration;

use backon::{BackoffBuilder, Retryable};

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Linear backoff: the n-th retry waits `n × backoff`
    pub backoff: Duration,
    pub retryable: fn(&DomainError) -> bool,
}

impl Default for RetryPolicy {
    /// Two retries on upstream 5xx, linear 1s backoff, never on 4xx.
    fn default() -> Self {
        Self::linear(2, Duration::from_secs(1))
    }
}

/// `step, 2 × step, ...` for at most `max_times` retries
#[derive(Debug, Clone, Copy)]
pub struct LinearBuilder {
    step: Duration,
    max_times: u32,
}

#[derive(Debug)]
pub struct LinearBackoff {
    step: Duration,
    max_times: u32,
    attempt: u32,
}

impl BackoffBuilder for LinearBuilder {
    type Backoff = LinearBackoff;

    fn build(self) -> Self::Backoff {
        LinearBackoff {
            step: self.step,
            max_times: self.max_times,
            attempt: 0,
        }
    }
}

impl Iterator for LinearBackoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.attempt >= self.max_times {
            return None;
        }
        self.attempt += 1;
        Some(self.step.saturating_mul(self.attempt))
    }
}

impl RetryPolicy {
    pub fn linear(max_retries: u32, base: Duration) -> Self {
        Self {
            max_retries,
            backoff: base,
            retryable: DomainError::is_server_error,
        }
    }

    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn schedule(&self) -> LinearBuilder {
        LinearBuilder {
            step: self.backoff,
            max_times: self.max_retries,
        }
    }

    pub async fn run<T, F, Fut>(&self, operation: &str, call: F) -> Result<T, DomainError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        call.retry(self.schedule())
            .when(self.retryable)
            .notify(|e: &DomainError, delay: Duration| {
                tracing::warn!(
                    "{} failed, retrying after {:.2}s: {}",
                    operation,
                    delay.as_secs_f64(),
                    e
                )
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn upstream(status: u16) -> DomainError {
        DomainError::Upstream {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn test_linear_backoff_grows_with_attempt() {
        let delays: Vec<Duration> = RetryPolicy::default().schedule().build().collect();
        assert_eq!(delays, vec![Duration::from_secs(1), Duration::from_secs(2)]);

        assert_eq!(RetryPolicy::none().schedule().build().next(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_server_errors_then_gives_up() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result: Result<(), _> = policy
            .run("planning list", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(upstream(500))
            })
            .await;

        assert!(matches!(result, Err(DomainError::Upstream { status: 500, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_never_retries_client_errors() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result: Result<(), _> = policy
            .run("planning list", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(upstream(404))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_transient_failure() {
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy::default();

        let result = policy
            .run("planning list", || async {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(upstream(502))
                } else {
                    Ok(42)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
