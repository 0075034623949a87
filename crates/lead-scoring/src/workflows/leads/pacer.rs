use std::time::Duration;

use async_trait::async_trait;

/// Spacing policy applied between consecutive classifier calls.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait until the next call may be issued.
    async fn pause(&self);
}

/// Sleeps a fixed interval between calls on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct IntervalPacer {
    interval: Duration,
}

impl IntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl Pacer for IntervalPacer {
    async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}
