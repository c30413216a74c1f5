//! Simulated network latency.
//!
//! Both timed operations on the page (the chat reply and the contact form
//! submission) wait a fixed delay before completing. The wait is an ordinary
//! future raced against a [`CancellationToken`], so a paused tokio clock can
//! drive it deterministically.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::{Result, SiteError};

/// Sleep for `delay` unless `cancel` fires first.
pub async fn simulate_latency(delay: Duration, cancel: &CancellationToken) -> Result<()> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            log::debug!("Simulated latency of {:?} cancelled", delay);
            Err(SiteError::Cancelled)
        }
        _ = tokio::time::sleep(delay) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_latency_completes_after_delay() {
        let cancel = CancellationToken::new();
        let started = tokio::time::Instant::now();
        simulate_latency(Duration::from_millis(1000), &cancel)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_cancelled_before_deadline() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            trigger.cancel();
        });

        let result = simulate_latency(Duration::from_secs(5), &cancel).await;
        assert!(matches!(result, Err(SiteError::Cancelled)));
    }

    #[tokio::test]
    async fn test_already_cancelled_token_short_circuits() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let result = simulate_latency(Duration::from_secs(3600), &cancel).await;
        assert!(matches!(result, Err(SiteError::Cancelled)));
    }
}
