//! Periodic tick scheduling.
//!
//! The original meter relied on a GUI toolkit timer for its once-per-second
//! accrual. The core instead exposes a plain callback-driven [`TickDriver`]
//! so it stays decoupled from any UI event loop: the embedding application
//! arms one driver when a trip starts and drops it on finalize. Stopping the
//! driver is the only cancellation concept.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Fixed-period tick source driving fare accrual.
///
/// The callback runs on the driver's own thread, once per period, until the
/// driver is stopped or dropped. Stopping is prompt: it does not wait out
/// the current period.
pub struct TickDriver {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Spawn a driver invoking `callback` every `period`.
    pub fn spawn<F>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => callback(),
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop ticking and join the driver thread.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn test_callback_fires_repeatedly() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let driver = TickDriver::spawn(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        std::thread::sleep(Duration::from_millis(100));
        driver.stop();
        assert!(count.load(Ordering::SeqCst) >= 3);
    }

    #[test]
    fn test_stop_is_prompt() {
        let driver = TickDriver::spawn(Duration::from_secs(30), || {});
        let before = Instant::now();
        driver.stop();
        assert!(before.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_no_ticks_after_stop() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let driver = TickDriver::spawn(Duration::from_millis(5), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        std::thread::sleep(Duration::from_millis(50));
        driver.stop();

        let frozen = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), frozen);
    }

    #[test]
    fn test_drop_stops_ticking() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        {
            let _driver = TickDriver::spawn(Duration::from_millis(5), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            std::thread::sleep(Duration::from_millis(30));
        }
        let frozen = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), frozen);
    }
}
