// src/infrastructure/retry.rs
//
// Fixed-backoff retry for the one feed that warrants it.
//
// Only the trending/landing feed retries; every other feed degrades to
// an empty result on failure. Keep that asymmetry: do not wrap secondary
// feeds in this helper.

use std::future::Future;
use std::time::Duration;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub attempts: u32,
    /// Fixed pause between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Run `op` until it succeeds, a non-transient error occurs, or the
/// attempt budget is exhausted. The last error is returned as-is.
pub async fn retry_fixed<T, F, Fut>(policy: RetryPolicy, mut op: F) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let attempts = policy.attempts.max(1);
    let mut last_err = None;

    for attempt in 1..=attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !err.is_transient() || attempt == attempts {
                    return Err(err);
                }
                log::warn!(
                    "attempt {}/{} failed ({}); retrying in {:?}",
                    attempt,
                    attempts,
                    err,
                    policy.backoff
                );
                last_err = Some(err);
                tokio::time::sleep(policy.backoff).await;
            }
        }
    }

    // Unreachable: the loop always returns on the final attempt.
    Err(last_err.expect("retry loop exited without an error"))
}
