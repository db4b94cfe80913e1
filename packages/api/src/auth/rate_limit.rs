//! Failed sign-in tracking.
//!
//! Sign-in failures are counted per email inside a sliding window; once the
//! threshold trips, further attempts for that email fail with
//! `auth/too-many-requests` until the window expires. A successful sign-in
//! clears the email's record.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

const MAX_FAILURES: u32 = 5;
const WINDOW: Duration = Duration::from_secs(15 * 60);

#[derive(Debug)]
struct Attempts {
    failures: u32,
    window_start: Instant,
}

/// In-process per-email sign-in limiter.
#[derive(Debug, Default)]
pub struct SignInLimiter {
    attempts: Mutex<HashMap<String, Attempts>>,
}

impl SignInLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this email is currently locked out.
    pub fn is_limited(&self, email: &str) -> bool {
        let mut attempts = self.attempts.lock().unwrap();
        match attempts.get(email) {
            Some(entry) if entry.window_start.elapsed() >= WINDOW => {
                attempts.remove(email);
                false
            }
            Some(entry) => entry.failures >= MAX_FAILURES,
            None => false,
        }
    }

    /// Record a failed attempt for this email.
    pub fn record_failure(&self, email: &str) {
        let mut attempts = self.attempts.lock().unwrap();
        let now = Instant::now();
        let entry = attempts.entry(email.to_string()).or_insert(Attempts {
            failures: 0,
            window_start: now,
        });
        if entry.window_start.elapsed() >= WINDOW {
            entry.failures = 0;
            entry.window_start = now;
        }
        entry.failures += 1;
    }

    /// Clear the record after a successful sign-in.
    pub fn record_success(&self, email: &str) {
        self.attempts.lock().unwrap().remove(email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_email_is_not_limited() {
        let limiter = SignInLimiter::new();
        assert!(!limiter.is_limited("a@example.com"));
    }

    #[test]
    fn trips_after_five_failures() {
        let limiter = SignInLimiter::new();
        for _ in 0..4 {
            limiter.record_failure("a@example.com");
        }
        assert!(!limiter.is_limited("a@example.com"));
        limiter.record_failure("a@example.com");
        assert!(limiter.is_limited("a@example.com"));
    }

    #[test]
    fn success_clears_the_record() {
        let limiter = SignInLimiter::new();
        for _ in 0..MAX_FAILURES {
            limiter.record_failure("a@example.com");
        }
        assert!(limiter.is_limited("a@example.com"));
        limiter.record_success("a@example.com");
        assert!(!limiter.is_limited("a@example.com"));
    }

    #[test]
    fn emails_are_tracked_independently() {
        let limiter = SignInLimiter::new();
        for _ in 0..MAX_FAILURES {
            limiter.record_failure("a@example.com");
        }
        assert!(!limiter.is_limited("b@example.com"));
    }
}
