//! Login attempt rate limiting
//!
//! Fixed-window throttling of repeated attempts per identifier (typically
//! the submitted email), entirely in process memory. Once the window ends
//! the counter restarts; the call that discovers an expired window counts
//! as the first attempt of the new one. There is no peek operation: every
//! admitted call consumes an attempt.
//!
//! There is no shared global instance. Callers construct a limiter and
//! hand it to whichever component performs authentication.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default maximum attempts admitted per window
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Default window duration (15 minutes)
pub const DEFAULT_ATTEMPT_WINDOW: Duration = Duration::from_secs(15 * 60);

/// Attempt bookkeeping for one identifier
#[derive(Debug, Clone)]
struct AttemptRecord {
    /// Attempts admitted in the current window
    count: u32,
    /// When the current window ends
    reset_at: Instant,
}

/// Fixed-window rate limiter keyed by opaque identifier strings
///
/// The map is mutex-guarded so concurrent callers cannot race the
/// read-then-increment and admit more than `max_attempts` per window.
#[derive(Debug)]
pub struct RateLimiter {
    /// Map of identifiers to their current window record
    attempts: Mutex<HashMap<String, AttemptRecord>>,
    /// Maximum attempts admitted per window
    max_attempts: u32,
    /// Window duration
    window: Duration,
}

impl RateLimiter {
    /// Create a rate limiter with the given limit and window
    #[must_use]
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts,
            window,
        }
    }

    /// Record an attempt for `identifier` and report whether it is admitted
    ///
    /// Returns `true` and increments the identifier's count while under the
    /// limit (starting a fresh window at count 1 if none is active), or
    /// `false` without changing any state once the limit is reached.
    pub fn can_attempt(&self, identifier: &str) -> bool {
        self.can_attempt_at(identifier, Instant::now())
    }

    /// Seconds until the identifier's window ends, rounded up
    ///
    /// Returns 0 when no window is active.
    #[must_use]
    pub fn remaining_secs(&self, identifier: &str) -> u64 {
        self.remaining_secs_at(identifier, Instant::now())
    }

    /// Forget all attempts recorded for `identifier`
    pub fn reset(&self, identifier: &str) {
        let mut attempts = self.attempts.lock().expect("rate limiter lock");
        attempts.remove(identifier);
    }

    fn can_attempt_at(&self, identifier: &str, now: Instant) -> bool {
        let mut attempts = self.attempts.lock().expect("rate limiter lock");
        match attempts.get_mut(identifier) {
            // Window still active: admit and count, or refuse at the limit
            Some(record) if now <= record.reset_at => {
                if record.count >= self.max_attempts {
                    return false;
                }
                record.count += 1;
                true
            }
            // No record, or the window has ended: start a fresh one
            _ => {
                attempts.insert(
                    identifier.to_string(),
                    AttemptRecord {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                true
            }
        }
    }

    fn remaining_secs_at(&self, identifier: &str, now: Instant) -> u64 {
        let attempts = self.attempts.lock().expect("rate limiter lock");
        match attempts.get(identifier) {
            Some(record) if now <= record.reset_at => {
                let remaining = record.reset_at.saturating_duration_since(now);
                let mut secs = remaining.as_secs();
                if remaining.subsec_nanos() > 0 {
                    secs += 1;
                }
                secs
            }
            _ => 0,
        }
    }
}

impl Default for RateLimiter {
    /// The login configuration: 5 attempts per 15-minute window
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_ATTEMPT_WINDOW)
    }
}
