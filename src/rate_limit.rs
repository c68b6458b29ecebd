//! Contact-form submission rate limiter.
//!
//! A UX guard, not a security control: at most [`MAX_ATTEMPTS`] accepted
//! submissions per rolling [`WINDOW_MS`] window, tracked in a persisted
//! record `{count, resetTime}`. Malformed or unreadable state fails open;
//! the user is never blocked by our own bookkeeping.
//!
//! Callers must observe `check_allowed() == true` immediately before
//! `record_attempt()` within one logical submission; the single-threaded
//! event context (the app lock in the HTTP layer) makes the pair safe
//! without further coordination.

use crate::storage::{PreferenceStore, RATE_LIMIT_KEY};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maximum accepted submissions per window.
pub const MAX_ATTEMPTS: u32 = 3;

/// Window length in milliseconds.
pub const WINDOW_MS: i64 = 60_000;

/// The persisted rate-limit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitRecord {
    pub count: u32,
    #[serde(rename = "resetTime")]
    pub reset_time: i64,
}

/// Bounds accepted submissions using persisted counter/window state.
pub struct RateLimiter {
    store: PreferenceStore,
}

impl RateLimiter {
    pub fn new(store: PreferenceStore) -> Self {
        Self { store }
    }

    /// Whether a submission is currently allowed.
    ///
    /// No record, an elapsed window, or unreadable state all allow the
    /// attempt; otherwise the recorded count must be under [`MAX_ATTEMPTS`].
    pub fn check_allowed(&self, now_ms: i64) -> bool {
        match self.load() {
            Some(record) if now_ms <= record.reset_time => record.count < MAX_ATTEMPTS,
            _ => true,
        }
    }

    /// Count an accepted submission.
    ///
    /// Starts a fresh window when none is active, otherwise increments the
    /// existing record in place. Write failures are logged and swallowed.
    pub fn record_attempt(&self, now_ms: i64) {
        let record = match self.load() {
            Some(existing) if now_ms <= existing.reset_time => RateLimitRecord {
                count: existing.count + 1,
                reset_time: existing.reset_time,
            },
            _ => RateLimitRecord {
                count: 1,
                reset_time: now_ms + WINDOW_MS,
            },
        };

        match serde_json::to_string(&record) {
            Ok(encoded) => {
                if let Err(e) = self.store.set(RATE_LIMIT_KEY, &encoded) {
                    warn!("Failed to update rate limit record: {:#}", e);
                }
            }
            Err(e) => warn!("Failed to encode rate limit record: {}", e),
        }
    }

    /// The current record, if any. Malformed state is reported and treated
    /// as absent (fail open).
    fn load(&self) -> Option<RateLimitRecord> {
        let raw = self.store.get(RATE_LIMIT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Malformed rate limit record ({}), treating as absent", e);
                None
            }
        }
    }
}
