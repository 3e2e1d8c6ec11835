//! # Temporal Types: Epoch Milliseconds and Clocks
//!
//! Pass issuance times are integer milliseconds since the Unix epoch. The
//! integer form is what gets signed, so it is what this module models;
//! `chrono` is used only at the boundary to read the wall clock and to
//! render timestamps for humans.
//!
//! Every component that needs "now" takes a [`Clock`], which keeps expiry
//! arithmetic testable with [`FixedClock`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochMillis(u64);

impl EpochMillis {
    /// Wrap a raw millisecond count.
    pub fn new(millis: u64) -> Self {
        Self(millis)
    }

    /// Access the inner millisecond count.
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Signed age of this timestamp at `now`. Negative when `self` lies in
    /// the future relative to `now`.
    pub fn age_at(&self, now: EpochMillis) -> i128 {
        i128::from(now.0) - i128::from(self.0)
    }

    /// Add a duration, saturating at `u64::MAX`.
    pub fn saturating_add(&self, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_add(millis))
    }

    /// Subtract a duration, saturating at the epoch.
    pub fn saturating_sub(&self, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self(self.0.saturating_sub(millis))
    }

    /// Convert to a UTC datetime, if representable.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.0).ok()?;
        DateTime::from_timestamp_millis(millis)
    }
}

impl From<DateTime<Utc>> for EpochMillis {
    /// Instants before the epoch clamp to zero.
    fn from(dt: DateTime<Utc>) -> Self {
        Self(u64::try_from(dt.timestamp_millis()).unwrap_or(0))
    }
}

impl std::fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// The current instant in epoch milliseconds.
    fn now(&self) -> EpochMillis;
}

/// Wall clock backed by `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> EpochMillis {
        EpochMillis::from(Utc::now())
    }
}

/// A manually driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: AtomicU64,
}

impl FixedClock {
    /// Create a clock frozen at `at`.
    pub fn new(at: EpochMillis) -> Self {
        Self {
            millis: AtomicU64::new(at.as_millis()),
        }
    }

    /// Jump to an absolute instant.
    pub fn set(&self, at: EpochMillis) {
        self.millis.store(at.as_millis(), Ordering::SeqCst);
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let next = self.now().saturating_add(by);
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> EpochMillis {
        EpochMillis(self.millis.load(Ordering::SeqCst))
    }
}
