//! Fixed-period ticker with cooperative cancellation.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Cancels every [`CancelToken`] created alongside it. Dropping the handle cancels too.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        let cancelled = *self.rx.borrow();
        cancelled || self.rx.has_changed().is_err()
    }

    /// Resolves once the handle has cancelled or been dropped.
    pub async fn cancelled(&mut self) {
        while !*self.rx.borrow_and_update() {
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }
}

pub struct Ticker {
    inner: Interval,
}

impl Ticker {
    /// First tick completes immediately. A late tick pushes the schedule back instead of bursting.
    pub fn new(period: Duration) -> Self {
        let mut inner = interval(period);
        inner.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { inner }
    }

    pub fn period(&self) -> Duration {
        self.inner.period()
    }

    /// Waits for the next tick. Returns `false` once `token` is cancelled.
    pub async fn next(&mut self, token: &mut CancelToken) -> bool {
        if token.is_cancelled() {
            return false;
        }
        tokio::select! {
            biased;
            _ = token.cancelled() => false,
            _ = self.inner.tick() => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn ticks_at_fixed_period() {
        let (_handle, mut token) = cancel_pair();
        let mut ticker = Ticker::new(Duration::from_secs(60));
        let start = Instant::now();

        assert!(ticker.next(&mut token).await);
        assert_eq!(start.elapsed(), Duration::ZERO);

        assert!(ticker.next(&mut token).await);
        assert!(ticker.next(&mut token).await);
        assert_eq!(start.elapsed(), Duration::from_secs(120));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_interrupts_wait() {
        let (handle, mut token) = cancel_pair();
        let mut ticker = Ticker::new(Duration::from_secs(60));
        assert!(ticker.next(&mut token).await);

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(5)).await;
            handle.cancel();
            handle
        });

        let start = Instant::now();
        assert!(!ticker.next(&mut token).await);
        assert!(start.elapsed() < Duration::from_secs(60));
        assert!(token.is_cancelled());
        drop(canceller.await.unwrap());
    }

    #[tokio::test]
    async fn cancelled_before_first_tick() {
        let (handle, mut token) = cancel_pair();
        handle.cancel();

        let mut ticker = Ticker::new(Duration::from_secs(60));
        assert!(!ticker.next(&mut token).await);
    }

    #[tokio::test]
    async fn dropping_handle_cancels() {
        let (handle, mut token) = cancel_pair();
        let clone = token.clone();
        drop(handle);

        token.cancelled().await;
        assert!(clone.is_cancelled());
    }
}
