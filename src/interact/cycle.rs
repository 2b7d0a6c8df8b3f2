//! Carousel position state and auto-advance.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

use crate::interact::timer::Ticker;

/// Interval between automatic carousel advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

// ============================================================================
// Cyclic Index
// ============================================================================

/// Position over a fixed number of slides, wrapping at the end.
///
/// An empty carousel pins the position at zero and every movement is a
/// no-op, so callers never need a length guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicIndex {
    index: usize,
    len: usize,
}

impl CyclicIndex {
    /// Creates a position at slide zero.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// The current slide index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.index
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves to the next slide, wrapping past the last one.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Moves to the previous slide, wrapping past the first one.
    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to a slide. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

// ============================================================================
// Auto-Cycle
// ============================================================================

/// Carousel state with an auto-advance timer.
///
/// Position changes publish on a watch channel so the host can
/// re-render the section with the new snapshot. Dropping the controller
/// cancels the timer.
#[derive(Debug)]
pub struct AutoCycle {
    position: Arc<Mutex<CyclicIndex>>,
    changed: watch::Sender<usize>,
    ticker: Ticker,
}

impl AutoCycle {
    /// Creates a stopped carousel at slide zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let (changed, _) = watch::channel(0);
        Self {
            position: Arc::new(Mutex::new(CyclicIndex::new(len))),
            changed,
            ticker: Ticker::new(AUTO_ADVANCE_INTERVAL),
        }
    }

    /// The current slide index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.position.lock().map_or(0, |position| position.current())
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.position.lock().map_or(0, |position| position.len())
    }

    /// Returns `true` when there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A snapshot of the position for rendering.
    #[must_use]
    pub fn snapshot(&self) -> CyclicIndex {
        self.position
            .lock()
            .map_or_else(|_| CyclicIndex::new(0), |position| *position)
    }

    /// Subscribes to position changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.changed.subscribe()
    }

    /// Returns `true` while the auto-advance timer runs.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Starts auto-advancing. Carousels with at most one slide have
    /// nothing to cycle through, so this does nothing for them.
    pub fn start(&mut self) {
        if self.len() <= 1 {
            return;
        }

        let position = Arc::clone(&self.position);
        let changed = self.changed.clone();
        self.ticker.start(move || {
            if let Ok(mut position) = position.lock() {
                position.advance();
                changed.send_replace(position.current());
            }
            ControlFlow::Continue(())
        });
    }

    /// Stops auto-advancing. Idempotent.
    pub fn stop(&mut self) {
        self.ticker.stop();
    }

    /// Manually moves to the next slide.
    pub fn advance(&mut self) {
        if let Ok(mut position) = self.position.lock() {
            position.advance();
            self.changed.send_replace(position.current());
        }
    }

    /// Manually moves to the previous slide.
    pub fn retreat(&mut self) {
        if let Ok(mut position) = self.position.lock() {
            position.retreat();
            self.changed.send_replace(position.current());
        }
    }

    /// Jumps to a slide (dot click). Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if let Ok(mut position) = self.position.lock() {
            position.select(index);
            self.changed.send_replace(position.current());
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn starts_at_zero() {
        let position = CyclicIndex::new(4);
        assert_eq!(position.current(), 0);
        assert_eq!(position.len(), 4);
    }

    #[test]
    fn advance_wraps_past_the_end() {
        let mut position = CyclicIndex::new(3);
        position.advance();
        position.advance();
        assert_eq!(position.current(), 2);
        position.advance();
        assert_eq!(position.current(), 0);
    }

    #[test]
    fn retreat_wraps_past_the_start() {
        let mut position = CyclicIndex::new(3);
        position.retreat();
        assert_eq!(position.current(), 2);
        position.retreat();
        assert_eq!(position.current(), 1);
    }

    #[test]
    fn empty_carousel_is_pinned_at_zero() {
        let mut position = CyclicIndex::new(0);
        position.advance();
        position.retreat();
        position.select(5);
        assert_eq!(position.current(), 0);
        assert!(position.is_empty());
    }

    #[test]
    fn single_slide_never_moves() {
        let mut position = CyclicIndex::new(1);
        position.advance();
        position.advance();
        assert_eq!(position.current(), 0);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut position = CyclicIndex::new(3);
        position.select(2);
        assert_eq!(position.current(), 2);
        position.select(3);
        assert_eq!(position.current(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_moves_every_interval() {
        let mut carousel = AutoCycle::new(3);
        carousel.start();
        assert!(carousel.is_running());
        assert_eq!(carousel.current(), 0);

        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        assert_eq!(carousel.current(), 1);

        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        assert_eq!(carousel.current(), 2);

        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        assert_eq!(carousel.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn single_slide_carousel_never_starts() {
        let mut carousel = AutoCycle::new(1);
        carousel.start();
        assert!(!carousel.is_running());

        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        assert_eq!(carousel.current(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_carousel_never_starts() {
        let mut carousel = AutoCycle::new(0);
        carousel.start();
        assert!(!carousel.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_halts_auto_advance() {
        let mut carousel = AutoCycle::new(3);
        carousel.start();

        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        carousel.stop();

        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        assert_eq!(carousel.current(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn position_changes_publish_to_subscribers() {
        let mut carousel = AutoCycle::new(2);
        let mut changes = carousel.subscribe();
        carousel.start();

        tokio::time::advance(AUTO_ADVANCE_INTERVAL).await;
        settle().await;
        assert!(changes.has_changed().unwrap());
        assert_eq!(*changes.borrow_and_update(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_select_publishes_without_timer() {
        let mut carousel = AutoCycle::new(4);
        let mut changes = carousel.subscribe();

        carousel.select(2);
        assert_eq!(carousel.current(), 2);
        assert_eq!(*changes.borrow_and_update(), 2);

        carousel.select(9);
        assert_eq!(carousel.current(), 2);
    }
}
