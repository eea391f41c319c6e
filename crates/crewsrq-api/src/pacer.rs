//! Delay strategy applied between the listings and content requests.
#![allow(clippy::future_not_send)]

use std::time::Duration;

/// Default pause between the two network calls.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Pause strategy.
///
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[trait_variant::make(Pacer: Send)]
pub trait LocalPacer {
    /// Waits before the next network call.
    async fn pause(&self);
}

/// Sleeps a fixed interval on every pause.
#[derive(Debug, Clone, Copy)]
pub struct FixedPacer {
    /// Sleep duration.
    interval: Duration,
}

impl FixedPacer {
    /// Creates a pacer sleeping `interval` on each pause.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// Configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedPacer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl LocalPacer for FixedPacer {
    async fn pause(&self) {
        if self.interval.is_zero() {
            return;
        }
        tracing::debug!(interval = ?self.interval, "Pausing before next request");
        tokio::time::sleep(self.interval).await;
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacer;

impl LocalPacer for NoPacer {
    async fn pause(&self) {}
}
