//! Debounce timer for coalescing bursts of value changes.
//!
//! The timer is an owned object with an explicit lifetime tied to the
//! controller or selector that holds it, not to any UI render cycle. Each
//! logical input slot owns one timer.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Default quiet period before a scheduled value commits.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Coalesces a burst of value-change events into a single commit after a
/// quiet period.
///
/// For N `schedule` calls spaced less than the delay apart, exactly one
/// commit fires, carrying the value from the last call. Rescheduling aborts
/// the superseded timer before it can fire; dropping the timer cancels any
/// pending commit.
#[derive(Debug)]
pub struct DebounceTimer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any not-yet-fired timer, then start a new one that calls
    /// `on_commit(value)` exactly once after the quiet period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<V, F>(&mut self, value: V, on_commit: F)
    where
        V: Send + 'static,
        F: FnOnce(V) + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_commit(value);
        }));
    }

    /// Clear a pending timer without invoking its callback.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// True while a scheduled commit has not yet fired or been cancelled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
