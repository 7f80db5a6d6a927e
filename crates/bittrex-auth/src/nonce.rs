//! Strictly increasing request nonces
//!
//! The exchange rejects a nonce that is not larger than the previous one seen
//! for the key. A wall-clock reading alone collides when two requests are
//! issued within the same tick, so the generator remembers the last value it
//! handed out and never returns anything smaller or equal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

/// Issues nonces derived from the current time in milliseconds
///
/// Each call returns `max(now_ms, last + 1)`, so values are strictly
/// increasing even under concurrent use from many tasks.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    /// Create a new generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the nonce for a new request
    pub fn generate(&self) -> u64 {
        self.generate_at(now_millis())
    }

    /// Generate a nonce as if the clock read `now_ms`
    pub fn generate_at(&self, now_ms: u64) -> u64 {
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);

        if now_ms <= previous {
            trace!(now_ms, previous, "Clock has not advanced past last nonce");
        }

        now_ms.max(previous.saturating_add(1))
    }

    /// The most recently issued nonce (0 if none yet)
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
