//! Count-up animation for the stats band.
//!
//! Each numeric stat climbs from zero to its target in fifty fixed
//! steps, one every 30ms, and stops exactly on the target. All counters
//! in a section share one clock.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

use crate::interact::timer::Ticker;

/// Time between counter updates.
pub const COUNTER_TICK: Duration = Duration::from_millis(30);

/// Number of steps from zero to the target.
const COUNTER_STEPS: f64 = 50.0;

// ============================================================================
// Tween
// ============================================================================

/// A single value climbing toward its target.
///
/// The step is a fiftieth of the target, so negative targets climb
/// down. Ticking clamps at the target; the final value is exact, never
/// an accumulation of float error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    current: f64,
    target: f64,
    step: f64,
}

impl Tween {
    /// Creates a tween at zero.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            current: 0.0,
            target,
            step: target / COUNTER_STEPS,
        }
    }

    /// The current value.
    #[must_use]
    pub const fn current(&self) -> f64 {
        self.current
    }

    /// The target value.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.target
    }

    /// Advances one step and returns the new value.
    pub fn tick(&mut self) -> f64 {
        self.current = if self.target >= 0.0 {
            (self.current + self.step).min(self.target)
        } else {
            (self.current + self.step).max(self.target)
        };
        self.current
    }

    /// Returns `true` once the value sits exactly on the target.
    #[must_use]
    #[allow(clippy::float_cmp)] // tick() clamps onto the target exactly
    pub fn done(&self) -> bool {
        self.current == self.target
    }
}

// ============================================================================
// Stat Counter
// ============================================================================

/// Animated counters for one stats section.
///
/// Values publish on a watch channel every tick. The shared clock stops
/// itself once every counter has reached its target; dropping the
/// controller stops it early.
#[derive(Debug)]
pub struct StatCounter {
    tweens: Arc<Mutex<Vec<Tween>>>,
    values: watch::Sender<Vec<f64>>,
    ticker: Ticker,
}

impl StatCounter {
    /// Creates counters at zero for the given targets.
    #[must_use]
    pub fn new(targets: &[f64]) -> Self {
        let tweens: Vec<Tween> = targets.iter().copied().map(Tween::new).collect();
        let (values, _) = watch::channel(vec![0.0; targets.len()]);
        Self {
            tweens: Arc::new(Mutex::new(tweens)),
            values,
            ticker: Ticker::new(COUNTER_TICK),
        }
    }

    /// The current values, in target order.
    #[must_use]
    pub fn current(&self) -> Vec<f64> {
        self.tweens
            .lock()
            .map_or_else(|_| Vec::new(), |tweens| {
                tweens.iter().map(Tween::current).collect()
            })
    }

    /// Returns `true` once every counter sits on its target.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.tweens
            .lock()
            .is_ok_and(|tweens| tweens.iter().all(Tween::done))
    }

    /// Subscribes to value updates.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<f64>> {
        self.values.subscribe()
    }

    /// Returns `true` while the shared clock runs.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Starts the count-up. Does nothing when every counter is already
    /// on its target (including the empty set).
    pub fn start(&mut self) {
        if self.is_done() {
            return;
        }

        let tweens = Arc::clone(&self.tweens);
        let values = self.values.clone();
        self.ticker.start(move || {
            let Ok(mut tweens) = tweens.lock() else {
                return ControlFlow::Break(());
            };

            let mut all_done = true;
            for tween in tweens.iter_mut() {
                tween.tick();
                all_done &= tween.done();
            }
            values.send_replace(tweens.iter().map(Tween::current).collect());

            if all_done {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
    }

    /// Stops the count-up where it stands. Idempotent.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn run_ticks(count: usize) {
        for _ in 0..count {
            tokio::time::advance(COUNTER_TICK).await;
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
        }
    }

    #[test]
    fn step_is_a_fiftieth_of_the_target() {
        let mut tween = Tween::new(150.0);
        assert!((tween.tick() - 3.0).abs() < f64::EPSILON);
        assert!((tween.tick() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reaches_the_target_exactly() {
        let mut tween = Tween::new(150.0);
        for _ in 0..60 {
            tween.tick();
        }
        assert!(tween.done());
        assert!((tween.current() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn never_overshoots() {
        let mut tween = Tween::new(1.0);
        for _ in 0..200 {
            assert!(tween.tick() <= 1.0);
        }
        assert!(tween.done());
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let tween = Tween::new(0.0);
        assert!(tween.done());
    }

    #[test]
    fn negative_target_climbs_down() {
        let mut tween = Tween::new(-50.0);
        assert!(tween.tick() < 0.0);
        for _ in 0..60 {
            tween.tick();
        }
        assert!(tween.done());
        assert!((tween.current() - -50.0).abs() < f64::EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn counter_climbs_on_the_shared_clock() {
        let mut counter = StatCounter::new(&[150.0, 500.0]);
        counter.start();
        assert!(counter.is_running());

        run_ticks(1).await;
        let values = counter.current();
        assert!((values[0] - 3.0).abs() < f64::EPSILON);
        assert!((values[1] - 10.0).abs() < f64::EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn counter_stops_itself_on_the_targets() {
        let mut counter = StatCounter::new(&[150.0, 500.0]);
        counter.start();

        run_ticks(55).await;
        assert_eq!(counter.current(), vec![150.0, 500.0]);
        assert!(counter.is_done());
        assert!(!counter.is_running());

        // A stopped clock leaves the values where they stand.
        run_ticks(5).await;
        assert_eq!(counter.current(), vec![150.0, 500.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn updates_publish_to_subscribers() {
        let mut counter = StatCounter::new(&[100.0]);
        let mut updates = counter.subscribe();
        counter.start();

        run_ticks(1).await;
        assert!(updates.has_changed().unwrap());
        let values = updates.borrow_and_update().clone();
        assert!((values[0] - 2.0).abs() < f64::EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn all_zero_targets_never_start() {
        let mut counter = StatCounter::new(&[0.0, 0.0]);
        counter.start();
        assert!(!counter.is_running());
        assert!(counter.is_done());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_counter_never_starts() {
        let mut counter = StatCounter::new(&[]);
        counter.start();
        assert!(!counter.is_running());
        assert!(counter.current().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_freezes_mid_climb() {
        let mut counter = StatCounter::new(&[150.0]);
        counter.start();

        run_ticks(10).await;
        counter.stop();
        let frozen = counter.current();
        assert!(!counter.is_done());

        run_ticks(10).await;
        assert_eq!(counter.current(), frozen);
    }
}
