//! Retry wrapper around a provider's network call
//!
//! Attempts an operation up to the policy's bound, sleeping between attempts.
//! Retries are unconditional on any error kind: transport failures, non-2xx
//! statuses, and decode failures all get the same treatment up to the limit.
//! On exhaustion the last error is wrapped with the operation name so callers
//! can tell which fetch gave up.

use crate::config::RetryPolicy;
use crate::error::{Error, Result};
use std::future::Future;

/// Run `operation` until it succeeds or `policy.max_attempts` is reached.
///
/// `operation_name` identifies the call in logs and in the exhaustion error.
/// A warning is logged when only one attempt remains.
///
/// # Example
///
/// ```no_run
/// use quotesnap::config::RetryPolicy;
/// use quotesnap::retry;
/// use std::time::Duration;
///
/// # async fn example() -> quotesnap::Result<()> {
/// let policy = RetryPolicy::fixed(3, Duration::from_secs(1));
/// let value = retry::run(&policy, "demo fetch", || async { Ok::<_, _>(42) }).await?;
/// # Ok(())
/// # }
/// ```
pub async fn run<F, Fut, T>(policy: &RetryPolicy, operation_name: &str, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::debug!(
                        operation = operation_name,
                        attempts = attempt,
                        "operation succeeded after retry"
                    );
                }
                return Ok(value);
            }
            Err(e) if attempt < max_attempts => {
                if attempt == max_attempts - 1 {
                    tracing::warn!(
                        operation = operation_name,
                        "one retry attempt remaining"
                    );
                }
                tracing::warn!(
                    error = %e,
                    operation = operation_name,
                    attempt = attempt,
                    max_attempts = max_attempts,
                    "operation failed, retrying"
                );
                tokio::time::sleep(policy.delay_after(attempt)).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    operation = operation_name,
                    attempts = max_attempts,
                    "operation failed after all retry attempts exhausted"
                );
                return Err(Error::RetryExhausted {
                    operation: operation_name.to_string(),
                    attempts: max_attempts,
                    source: Box::new(e),
                });
            }
        }
    }
}
