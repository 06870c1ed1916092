//! Periodic re-sampling handle for the alignment view.
//!
//! Simulated positions go stale as the clock advances, so live views
//! refresh them on an interval. The interval is an explicit handle whose background
//! thread is stopped and joined on `stop()` or on drop, so a torn-down
//! view can never leak a timer.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

/// A running periodic callback. Stops on `stop()` or drop.
pub struct AlignmentTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl AlignmentTicker {
    /// Start invoking `tick` every `interval` until stopped.
    ///
    /// The first invocation happens after the first interval elapses, not
    /// immediately. The stop flag is polled in small steps so `stop()`
    /// returns promptly even for long intervals.
    pub fn start<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let handle = std::thread::spawn(move || {
            let poll = Duration::from_millis(25).min(interval);
            loop {
                let mut waited = Duration::ZERO;
                while waited < interval {
                    if stop_flag.load(Ordering::Relaxed) {
                        return;
                    }
                    let step = poll.min(interval - waited);
                    std::thread::sleep(step);
                    waited += step;
                }
                if stop_flag.load(Ordering::Relaxed) {
                    return;
                }
                tick();
            }
        });

        Self { stop, handle: Some(handle) }
    }

    /// Signal the ticker to stop and wait for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            // A panicking tick already poisoned nothing we own; ignore it.
            let _ = handle.join();
        }
    }
}

impl Drop for AlignmentTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn ticks_fire_periodically() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let ticker = AlignmentTicker::start(Duration::from_millis(10), move || {
            c.fetch_add(1, Ordering::Relaxed);
        });
        std::thread::sleep(Duration::from_millis(120));
        ticker.stop();
        assert!(count.load(Ordering::Relaxed) >= 3);
    }

    #[test]
    fn stop_halts_ticking() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        let ticker = AlignmentTicker::start(Duration::from_millis(10), move || {
            c.fetch_add(1, Ordering::Relaxed);
        });
        std::thread::sleep(Duration::from_millis(50));
        ticker.stop();
        let after_stop = count.load(Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::Relaxed), after_stop);
    }

    #[test]
    fn drop_cancels_without_ticking_long_intervals() {
        let count = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&count);
        {
            let _ticker = AlignmentTicker::start(Duration::from_secs(3600), move || {
                c.fetch_add(1, Ordering::Relaxed);
            });
        }
        // Drop returned, so the thread is already joined.
        assert_eq!(count.load(Ordering::Relaxed), 0);
    }
}
