use std::time::Duration;

use eframe::egui;
use tokio::task::{self, JoinHandle};
use tokio::time::{self, MissedTickBehavior};

/// How often the clock face is redrawn.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Something that can be asked to redraw. Requests may be coalesced by the receiver.
pub trait RepaintSink: Send + Sync + 'static {
    fn request_repaint(&self);
}

impl RepaintSink for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

pub fn tick<S: RepaintSink + ?Sized>(sink: &S) {
    sink.request_repaint();
}

/// Owns the single periodic repaint registration. Dropping it cancels the timer.
pub struct RepaintTicker {
    handle: JoinHandle<()>,
}

impl RepaintTicker {
    /// Must be called from within a tokio runtime.
    pub fn start<S: RepaintSink>(sink: S, period: Duration) -> Self {
        let handle = task::spawn(async move {
            let mut interval = time::interval(period);
            // after a suspend, catch up with one repaint instead of a burst
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                tick(&sink);
            }
        });
        tracing::debug!(?period, "repaint ticker started");
        Self { handle }
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for RepaintTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("repaint ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    impl RepaintSink for Counter {
        fn request_repaint(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Counter {
        fn get(&self) -> usize {
            self.0.load(Ordering::SeqCst)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let counter = Counter::default();
        let ticker = RepaintTicker::start(counter.clone(), TICK_PERIOD);
        assert!(ticker.is_running());

        time::sleep(Duration::from_millis(3500)).await;
        // immediate first tick plus one per elapsed second
        let fired = counter.get();
        assert!((3..=4).contains(&fired), "fired {fired} times");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_stops_the_timer() {
        let counter = Counter::default();
        let ticker = RepaintTicker::start(counter.clone(), TICK_PERIOD);
        time::sleep(Duration::from_millis(1500)).await;
        drop(ticker);
        task::yield_now().await;
        let fired = counter.get();

        time::sleep(Duration::from_secs(10)).await;
        assert_eq!(counter.get(), fired);
    }

    #[test]
    fn tick_requests_one_repaint() {
        let counter = Counter::default();
        tick(&counter);
        tick(&counter);
        assert_eq!(counter.get(), 2);
    }
}
