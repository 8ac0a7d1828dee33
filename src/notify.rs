//! Transient, non-blocking notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_TOASTS: usize = 5;
const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created: Instant,
}

/// Bounded queue of toasts; the oldest is evicted when full.
///
/// Every toast lives for the same fixed time regardless of how many failures
/// came before it.
#[derive(Debug, Clone)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    ttl: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(TOAST_TTL)
    }
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::with_capacity(MAX_TOASTS),
            ttl,
        }
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.push_at(level, message, Instant::now());
    }

    pub fn push_at(&mut self, level: ToastLevel, message: impl Into<String>, now: Instant) {
        if self.queue.len() == MAX_TOASTS {
            self.queue.pop_front();
        }
        self.queue.push_back(Toast {
            level,
            message: message.into(),
            created: now,
        });
    }

    /// Drop toasts older than the TTL.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.queue
            .retain(|t| now.saturating_duration_since(t.created) < ttl);
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
