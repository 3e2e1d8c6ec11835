//! # Single-Use Guard
//!
//! A [`Validator`] accepts the same pass every time it is presented until it
//! expires. Venues that need one entry per pass compose it with a
//! [`ConsumedTokenStore`] owned by the deployment (a database table, a shared
//! cache, or [`InMemoryConsumedTokens`] for a single scanner process).
//!
//! Only fully accepted passes are recorded. A rejected pass never consumes
//! its key, so a forged copy cannot burn a genuine pass.

use std::time::Duration;

use bpass_core::{BookingId, EpochMillis, SharedSecret};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::outcome::{Outcome, RejectReason};
use crate::validator::Validator;

/// Identity of an issued pass for replay tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenKey {
    /// The booking.
    pub booking_id: BookingId,
    /// The issuance instant; distinguishes re-issued passes for one booking.
    pub issued_at: EpochMillis,
}

/// Set of passes that have already been accepted.
pub trait ConsumedTokenStore: Send + Sync {
    /// Atomically record `key`. Returns `false` if it was already present.
    ///
    /// `expires_at` is the instant after which the pass would be rejected
    /// as expired anyway; stores may forget the key after it.
    fn try_consume(&self, key: TokenKey, expires_at: EpochMillis) -> bool;
}

/// Process-local consumed-pass set.
#[derive(Debug, Default)]
pub struct InMemoryConsumedTokens {
    entries: DashMap<TokenKey, EpochMillis>,
}

impl InMemoryConsumedTokens {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop keys whose passes have expired by `now`. Returns how many were
    /// removed.
    pub fn prune(&self, now: EpochMillis) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, expires_at| *expires_at >= now);
        before - self.entries.len()
    }

    /// Number of recorded passes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no pass has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConsumedTokenStore for InMemoryConsumedTokens {
    fn try_consume(&self, key: TokenKey, expires_at: EpochMillis) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(expires_at);
                true
            }
        }
    }
}

/// A validator that accepts each pass at most once.
#[derive(Debug)]
pub struct SingleUseValidator<S> {
    validator: Validator,
    store: S,
}

impl<S: ConsumedTokenStore> SingleUseValidator<S> {
    /// Compose a validator with a consumed-pass store.
    pub fn new(validator: Validator, store: S) -> Self {
        Self { validator, store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Verify `raw` and consume it on success.
    pub fn validate(&self, raw: &str, secret: &SharedSecret) -> Outcome {
        let window = self.validator.config().validity_window;
        self.validate_with_window(raw, secret, window)
    }

    /// Verify `raw` with an explicit window and consume it on success.
    pub fn validate_with_window(&self, raw: &str, secret: &SharedSecret, window: Duration) -> Outcome {
        let payload = match self.validator.check(raw, secret, window) {
            Ok(payload) => payload,
            Err(reason) => return Outcome::Invalid { reason },
        };

        let key = TokenKey {
            booking_id: payload.booking_id(),
            issued_at: payload.issued_at(),
        };
        if self.store.try_consume(key, payload.issued_at().saturating_add(window)) {
            Outcome::Valid {
                booking_id: payload.booking_id(),
            }
        } else {
            tracing::warn!(
                target: "bpass::security",
                booking_id = %key.booking_id,
                issued_at = %key.issued_at,
                "rejected pass: already used"
            );
            Outcome::Invalid {
                reason: RejectReason::AlreadyUsed,
            }
        }
    }
}
