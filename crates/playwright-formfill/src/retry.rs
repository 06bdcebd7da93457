// Retry policy - Bounded retries for unstable UI interactions
//
// Clicks on freshly rendered overlays fail transiently (stale option lists,
// an animation still covering the target). Every retry in the crate goes
// through this type so that each loop has an explicit attempt cap.

use crate::error::{Error, Result};
use std::future::Future;

/// Retries an async operation up to `max_attempts` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    /// Creates a policy; zero is treated as a single attempt
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    /// Returns the attempt cap
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Runs `op` until it succeeds or the attempts run out.
    ///
    /// `op` receives the 1-based attempt number. Fails with
    /// [`Error::RetryExhausted`] wrapping the last attempt's error.
    pub async fn run<T, Op, Fut>(&self, operation: &str, op: Op) -> Result<T>
    where
        Op: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.run_with_recovery(operation, op, || async {}).await
    }

    /// Like [`run`](Self::run), awaiting `recover` between failed attempts.
    pub async fn run_with_recovery<T, Op, Fut, Rec, RecFut>(
        &self,
        operation: &str,
        mut op: Op,
        mut recover: Rec,
    ) -> Result<T>
    where
        Op: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T>>,
        Rec: FnMut() -> RecFut,
        RecFut: Future<Output = ()>,
    {
        let mut attempt = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.max_attempts => {
                    tracing::debug!(
                        "{} failed (attempt {}/{}): {}",
                        operation,
                        attempt,
                        self.max_attempts,
                        e
                    );
                    recover().await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(Error::RetryExhausted {
                        operation: operation.to_string(),
                        attempts: attempt,
                        last: Box::new(e),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn flaky(failures: u32, calls: &AtomicU32) -> Result<u32> {
        let call = calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= failures {
            Err(Error::interaction("click", "#flaky", "stale element"))
        } else {
            Ok(call)
        }
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let recoveries = AtomicU32::new(0);
        let (calls_ref, recoveries_ref) = (&calls, &recoveries);

        let result = RetryPolicy::new(3)
            .run_with_recovery(
                "click",
                move |_| async move { flaky(2, calls_ref) },
                move || async move {
                    recoveries_ref.fetch_add(1, Ordering::SeqCst);
                },
            )
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(recoveries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_exhaustion_reports_attempts_and_last_error() {
        let calls = AtomicU32::new(0);
        let calls_ref = &calls;

        let result = RetryPolicy::new(2)
            .run("open dropdown", move |_| async move { flaky(10, calls_ref) })
            .await;

        match result {
            Err(Error::RetryExhausted {
                operation,
                attempts,
                last,
            }) => {
                assert_eq!(operation, "open dropdown");
                assert_eq!(attempts, 2);
                assert!(matches!(*last, Error::Interaction { .. }));
            }
            other => panic!("expected RetryExhausted, got {:?}", other),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_attempt_numbers_are_one_based() {
        let mut seen = Vec::new();
        let _ = RetryPolicy::new(3)
            .run("noop", |attempt| {
                seen.push(attempt);
                async { Err::<(), _>(Error::Timeout("never".to_string())) }
            })
            .await;
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_zero_attempts_means_one() {
        assert_eq!(RetryPolicy::new(0).max_attempts(), 1);
    }
}
