//! # Pass Lifecycle Tests
//!
//! End-to-end issuance and verification: `Encoder` produces the artifact,
//! the scanned text goes through `Validator`, both sides sharing one clock.

use std::sync::Arc;
use std::time::Duration;

use bpass_codec::Encoder;
use bpass_core::{BookingId, Clock, EpochMillis, FixedClock, PassConfig, SharedSecret};
use bpass_crypto::Signer;
use bpass_verify::{
    InMemoryConsumedTokens, Outcome, RejectReason, SingleUseValidator, Validator,
};
use proptest::prelude::*;

fn shared_clock(at: u64) -> Arc<FixedClock> {
    Arc::new(FixedClock::new(EpochMillis::new(at)))
}

fn pair(clock: &Arc<FixedClock>) -> (Encoder, Validator) {
    let clock: Arc<dyn Clock> = clock.clone();
    (
        Encoder::new(Signer::sha256(), Arc::clone(&clock)),
        Validator::new(PassConfig::default(), clock),
    )
}

#[test]
fn issue_then_expire_scenario() {
    let clock = shared_clock(0);
    let (encoder, validator) = pair(&clock);
    let secret = SharedSecret::new("k").unwrap();

    let artifact = encoder.encode(BookingId::new(42).unwrap(), &secret).unwrap();
    assert_eq!(artifact.payload().issued_at(), EpochMillis::new(0));
    assert_eq!(
        artifact.payload().signature(),
        "bc91984a77ba03d43b93a71b324df6c098281d355a0e8a6b579e5365aa81b008"
    );

    let outcome = validator.validate(artifact.text(), &secret);
    assert_eq!(
        outcome,
        Outcome::Valid {
            booking_id: BookingId::new(42).unwrap()
        }
    );
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"valid":true,"bookingId":42}"#
    );

    clock.advance(Duration::from_secs(25 * 60 * 60));
    let outcome = validator.validate(artifact.text(), &secret);
    assert_eq!(outcome.reason(), Some(RejectReason::Expired));
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"valid":false,"reason":"expired"}"#
    );
}

#[test]
fn wrong_secret_is_never_a_format_error() {
    let clock = shared_clock(1_768_478_400_000);
    let (encoder, validator) = pair(&clock);
    let artifact = encoder
        .encode(BookingId::new(5).unwrap(), &SharedSecret::new("issuer").unwrap())
        .unwrap();
    let outcome = validator.validate(artifact.text(), &SharedSecret::new("verifier").unwrap());
    assert_eq!(outcome.reason(), Some(RejectReason::InvalidSignature));
}

#[test]
fn single_use_over_issued_artifact() {
    let clock = shared_clock(0);
    let (encoder, validator) = pair(&clock);
    let secret = SharedSecret::new("k").unwrap();
    let guard = SingleUseValidator::new(validator, InMemoryConsumedTokens::new());

    let artifact = encoder.encode(BookingId::new(8).unwrap(), &secret).unwrap();
    assert!(guard.validate(artifact.text(), &secret).is_valid());
    assert_eq!(
        guard.validate(artifact.text(), &secret).reason(),
        Some(RejectReason::AlreadyUsed)
    );

    clock.advance(Duration::from_secs(25 * 60 * 60));
    assert_eq!(guard.store().prune(clock.now()), 1);
}

#[test]
fn concurrent_validation_is_independent() {
    let clock = shared_clock(0);
    let (encoder, validator) = pair(&clock);
    let validator = Arc::new(validator);
    let secret = SharedSecret::new("k").unwrap();

    let texts: Vec<String> = (1..=16)
        .map(|id| {
            encoder
                .encode(BookingId::new(id).unwrap(), &secret)
                .unwrap()
                .text()
                .to_string()
        })
        .collect();

    let handles: Vec<_> = texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let validator = Arc::clone(&validator);
            let secret = secret.clone();
            std::thread::spawn(move || (i as u64 + 1, validator.validate(&text, &secret)))
        })
        .collect();

    for handle in handles {
        let (expected, outcome) = handle.join().unwrap();
        assert_eq!(outcome.booking_id().map(|b| b.get()), Some(expected));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Any issued pass verifies immediately under the issuing secret.
    #[test]
    fn round_trip(booking in 1u64..u64::MAX, key in "[ -~]{1,48}", at in 0u64..4_000_000_000_000) {
        prop_assume!(!key.trim().is_empty());
        let clock = shared_clock(at);
        let (encoder, validator) = pair(&clock);
        let secret = SharedSecret::new(key).unwrap();
        let artifact = encoder.encode(BookingId::new(booking).unwrap(), &secret).unwrap();
        let outcome = validator.validate(artifact.text(), &secret);
        prop_assert_eq!(outcome.booking_id().map(|b| b.get()), Some(booking));
    }
}
