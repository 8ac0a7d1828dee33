//! Refresh triggers and the policy that drives them.
//!
//! A [`RefreshPolicy`] is an owned resource: `start` subscribes its triggers,
//! `stop` (or drop) cancels them. Once `stop` returns no callback is running
//! and none will run again.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Event source that asks a view for fresh data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    /// Fire once, synchronously, inside `start()`.
    Mount,
    /// Fire every period, first tick one period after `start()`.
    Interval(Duration),
    /// Fire when `trigger()` is called.
    Manual,
}

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Owns the timers for one view.
///
/// The callback runs while an internal gate is held, which is what makes
/// `stop()` wait out a concurrent tick. The callback must not call back into
/// its own policy.
pub struct RefreshPolicy {
    triggers: Vec<RefreshTrigger>,
    gate: Arc<Mutex<Option<Callback>>>,
    timers: Vec<JoinHandle<()>>,
}

impl RefreshPolicy {
    pub fn new(triggers: Vec<RefreshTrigger>) -> Self {
        Self {
            triggers,
            gate: Arc::new(Mutex::new(None)),
            timers: Vec::new(),
        }
    }

    pub fn triggers(&self) -> &[RefreshTrigger] {
        &self.triggers
    }

    pub fn is_running(&self) -> bool {
        self.gate.lock().is_some()
    }

    /// Begin observing the configured triggers.
    ///
    /// Restarting a running policy stops the previous subscription first.
    pub fn start(&mut self, callback: impl Fn() + Send + Sync + 'static) {
        if self.is_running() {
            self.stop();
        }

        *self.gate.lock() = Some(Arc::new(callback));

        for trigger in self.triggers.clone() {
            match trigger {
                RefreshTrigger::Mount => {
                    fire(&self.gate);
                }
                RefreshTrigger::Interval(period) => self.spawn_interval(period),
                RefreshTrigger::Manual => {}
            }
        }
    }

    fn spawn_interval(&mut self, period: Duration) {
        if period.is_zero() {
            tracing::warn!("Ignoring zero-length refresh interval");
            return;
        }
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!(period_ms = period.as_millis() as u64, "No async runtime, interval trigger disabled");
            return;
        };

        let gate = Arc::clone(&self.gate);
        let timer = handle.spawn(async move {
            loop {
                // Each tick is scheduled from the previous one; drift is not corrected.
                tokio::time::sleep(period).await;
                if !fire(&gate) {
                    break;
                }
            }
        });
        self.timers.push(timer);
    }

    /// Fire the manual trigger.
    ///
    /// Returns `false` when the policy has no `Manual` binding or is stopped.
    pub fn trigger(&self) -> bool {
        if !self.triggers.contains(&RefreshTrigger::Manual) {
            return false;
        }
        fire(&self.gate)
    }

    /// Cancel every trigger. No callback runs after this returns.
    pub fn stop(&mut self) {
        // Taking the gate waits for an in-progress callback to finish.
        let was_running = self.gate.lock().take().is_some();
        for timer in self.timers.drain(..) {
            timer.abort();
        }
        if was_running {
            tracing::debug!("Refresh policy stopped");
        }
    }
}

impl Drop for RefreshPolicy {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Run the callback if the policy is still active.
fn fire(gate: &Mutex<Option<Callback>>) -> bool {
    let guard = gate.lock();
    match guard.as_ref() {
        Some(callback) => {
            callback();
            true
        }
        None => false,
    }
}
