use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use tracing::trace;

use crate::common::Property;

/// Debounced visibility controller for the control overlay.
///
/// Activity shows the overlay immediately and schedules a single-shot hide
/// after the idle window. Each `poke` supersedes the pending hide, and a
/// generation counter guards against a stale timer firing after it was
/// superseded or suppressed.
#[derive(Debug, Clone)]
pub struct AutoHideTimer {
    visible: Property<bool>,
    suppressed: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    idle_window: Duration,
}

impl AutoHideTimer {
    /// Create a timer with the overlay initially visible.
    pub fn new(idle_window: Duration) -> Self {
        Self {
            visible: Property::new(true),
            suppressed: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
            idle_window,
        }
    }

    /// Observable visibility of the overlay.
    pub fn visible(&self) -> &Property<bool> {
        &self.visible
    }

    /// Whether hiding is currently suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.load(Ordering::SeqCst)
    }

    /// Register activity: show the overlay, cancel any pending hide and
    /// schedule a fresh one after the idle window (unless suppressed).
    pub fn poke(&self) {
        self.visible.set(true);
        let generation = self.bump_generation();

        if self.is_suppressed() {
            return;
        }

        let timer = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timer.idle_window).await;

            // Stale-timer guard: a fired timer that was superseded by a
            // later poke, or suppressed after scheduling, must be a no-op.
            if timer.generation.load(Ordering::SeqCst) == generation && !timer.is_suppressed() {
                trace!("Idle window elapsed, hiding overlay");
                timer.visible.set(false);
            }
        });
    }

    /// Pin the overlay visible (paused or menu-open states) or release it.
    ///
    /// Suppressing cancels any pending hide. Releasing does not hide by
    /// itself; the overlay stays up until the next `poke`'s idle window
    /// elapses.
    pub fn suppress(&self, flag: bool) {
        self.suppressed.store(flag, Ordering::SeqCst);
        if flag {
            self.bump_generation();
            self.visible.set(true);
        }
    }

    /// Force the overlay visible without scheduling a hide.
    ///
    /// Explicit show event for the end-of-media path; any pending hide is
    /// cancelled.
    pub fn show(&self) {
        self.bump_generation();
        self.visible.set(true);
    }

    /// Hide immediately (pointer-leave path), unless suppressed.
    pub fn hide_now(&self) {
        if self.is_suppressed() {
            return;
        }
        self.bump_generation();
        self.visible.set(false);
    }

    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const IDLE: Duration = Duration::from_millis(1500);

    async fn settle(duration: Duration) {
        tokio::time::sleep(duration).await;
        // Let the spawned hide task observe the elapsed timer.
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn hides_after_idle_window() {
        let timer = AutoHideTimer::new(IDLE);
        timer.poke();
        assert!(timer.visible().get());

        settle(Duration::from_millis(1501)).await;
        assert!(!timer.visible().get());
    }

    #[tokio::test(start_paused = true)]
    async fn repoke_supersedes_pending_hide() {
        let timer = AutoHideTimer::new(IDLE);
        timer.poke();

        settle(Duration::from_millis(1000)).await;
        timer.poke();

        settle(Duration::from_millis(1000)).await;
        assert!(timer.visible().get(), "first timer must be stale");

        settle(Duration::from_millis(600)).await;
        assert!(!timer.visible().get());
    }

    #[tokio::test(start_paused = true)]
    async fn suppression_pins_overlay_visible() {
        let timer = AutoHideTimer::new(IDLE);
        timer.poke();
        timer.suppress(true);

        settle(Duration::from_millis(5000)).await;
        assert!(timer.visible().get());
    }

    #[tokio::test(start_paused = true)]
    async fn release_alone_does_not_hide() {
        let timer = AutoHideTimer::new(IDLE);
        timer.poke();
        timer.suppress(true);
        settle(Duration::from_millis(2000)).await;

        timer.suppress(false);
        settle(Duration::from_millis(2000)).await;
        assert!(timer.visible().get(), "hide requires a fresh poke");

        timer.poke();
        settle(Duration::from_millis(1501)).await;
        assert!(!timer.visible().get());
    }

    #[tokio::test(start_paused = true)]
    async fn hide_now_respects_suppression() {
        let timer = AutoHideTimer::new(IDLE);
        timer.suppress(true);
        timer.hide_now();
        assert!(timer.visible().get());

        timer.suppress(false);
        timer.hide_now();
        assert!(!timer.visible().get());
    }

    #[tokio::test(start_paused = true)]
    async fn show_cancels_pending_hide() {
        let timer = AutoHideTimer::new(IDLE);
        timer.poke();
        settle(Duration::from_millis(1000)).await;

        timer.show();
        settle(Duration::from_millis(1000)).await;
        assert!(timer.visible().get());
    }
}
