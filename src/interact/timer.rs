//! Reusable timer primitives.
//!
//! Every timed behavior in the interaction layer runs on one of two
//! primitives: a [`Ticker`] that fires repeatedly at a fixed period, or
//! a [`Delay`] that fires once. Both own a spawned task, both can be
//! stopped and restarted, and both cancel their task on drop so a
//! dismounted section never leaves a timer behind.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

// ============================================================================
// Ticker
// ============================================================================

/// Repeating timer.
///
/// The first tick fires one full period after [`Ticker::start`], not
/// immediately. The callback decides whether to keep going: returning
/// `ControlFlow::Break` ends the timer from inside a tick.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    cancel: Option<CancellationToken>,
}

impl Ticker {
    /// Creates a stopped ticker with the given period.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            cancel: None,
        }
    }

    /// The tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Returns `true` while the tick task is alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Starts ticking. A running ticker is stopped and restarted, which
    /// resets the period clock.
    pub fn start<F>(&mut self, mut on_tick: F)
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        self.stop();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let period = self.period;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    () = cancelled.cancelled() => break,
                    _ = interval.tick() => {
                        if on_tick().is_break() {
                            cancelled.cancel();
                            break;
                        }
                    }
                }
            }
        });

        self.cancel = Some(token);
    }

    /// Stops the tick task. Idempotent.
    pub fn stop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

// ============================================================================
// Delay
// ============================================================================

/// One-shot timer.
///
/// Starting a pending delay cancels the earlier one first, so the
/// callback fires a full duration after the most recent start.
#[derive(Debug)]
pub struct Delay {
    duration: Duration,
    cancel: Option<CancellationToken>,
}

impl Delay {
    /// Creates an idle delay with the given duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            cancel: None,
        }
    }

    /// The delay duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns `true` while a callback is scheduled and has not fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Schedules the callback, cancelling any pending one.
    pub fn start<F>(&mut self, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.stop();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let duration = self.duration;

        tokio::spawn(async move {
            tokio::select! {
                () = cancelled.cancelled() => {}
                () = tokio::time::sleep(duration) => {
                    on_fire();
                    cancelled.cancel();
                }
            }
        });

        self.cancel = Some(token);
    }

    /// Cancels the pending callback, if any. Idempotent.
    pub fn stop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

impl Drop for Delay {
    fn drop(&mut self) {
        self.stop();
    }
}

// ============================================================================
// Tests
// ============================================================================
