//! Signed-webhook verification.
//!
//! Callbacks carry a signature header (HMAC-SHA256 over
//! `"{timestamp}.{raw_body}"`, lowercase hex by default) and a timestamp
//! header (unix seconds as decimal ASCII). Verification runs the freshness
//! gate first, so no hashing happens for requests that are already stale,
//! then recomputes the digest over the exact bytes received and compares it
//! to the claimed signature in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Default replay tolerance in seconds, symmetric around the current time.
pub const DEFAULT_TOLERANCE_SECONDS: u64 = 300;

/// Byte length of an HMAC-SHA256 digest.
const DIGEST_LEN: usize = 32;

/// Why a webhook was rejected. Every variant means "do not trust this
/// request"; none of them is a crash path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// Timestamp value is empty or not a base-10 integer.
    #[error("timestamp is not a decimal unix-seconds value")]
    MalformedTimestamp,
    /// Timestamp parsed but falls outside the tolerance window.
    #[error("timestamp is outside the replay tolerance window")]
    StaleOrFutureTimestamp,
    /// Claimed signature cannot be decoded from its wire encoding.
    #[error("signature cannot be decoded from its wire encoding")]
    MalformedSignature,
    /// Decoded signature does not equal the recomputed digest. Length
    /// mismatches land here too; callers cannot tell the two apart.
    #[error("signature does not match the signed payload")]
    SignatureMismatch,
}

/// Wire encoding of the claimed signature value.
///
/// `Hex` (lowercase) is the canonical contract; every known sender emits
/// `hex::encode` of the digest. `Utf8Raw` compares the header bytes directly
/// against the raw digest for senders that ship digest bytes verbatim. The
/// mode is always caller-selected, never auto-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureEncoding {
    #[default]
    Hex,
    Utf8Raw,
}

/// Verify an inbound webhook with the default tolerance and hex encoding.
///
/// `raw_body` must be the exact bytes received on the wire, never the result
/// of parsing and re-serializing the payload.
pub fn verify(
    raw_body: &[u8],
    signature: &str,
    timestamp: &str,
    secret: &[u8],
) -> Result<(), VerifyError> {
    verify_with_options(
        raw_body,
        signature,
        timestamp,
        secret,
        DEFAULT_TOLERANCE_SECONDS,
        SignatureEncoding::Hex,
    )
}

/// Verify with an explicit tolerance window and signature encoding.
pub fn verify_with_options(
    raw_body: &[u8],
    signature: &str,
    timestamp: &str,
    secret: &[u8],
    tolerance_seconds: u64,
    encoding: SignatureEncoding,
) -> Result<(), VerifyError> {
    verify_at(
        raw_body,
        signature,
        timestamp,
        secret,
        tolerance_seconds,
        encoding,
        unix_now(),
    )
}

/// Verification against an explicit clock. The public entry points call this
/// with the system clock; callers that need a deterministic clock (tests,
/// replay analysis) pass their own `now`.
pub fn verify_at(
    raw_body: &[u8],
    signature: &str,
    timestamp: &str,
    secret: &[u8],
    tolerance_seconds: u64,
    encoding: SignatureEncoding,
    now: u64,
) -> Result<(), VerifyError> {
    check_freshness(timestamp, tolerance_seconds, now)?;

    let claimed = match encoding {
        SignatureEncoding::Hex => {
            hex::decode(signature).map_err(|_| VerifyError::MalformedSignature)?
        }
        SignatureEncoding::Utf8Raw => signature.as_bytes().to_vec(),
    };

    // Digest length is not secret-dependent, so a plain comparison is fine
    // here; it also keeps the constant-time check on equal-length inputs.
    if claimed.len() != DIGEST_LEN {
        return Err(VerifyError::SignatureMismatch);
    }

    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        // HMAC-SHA256 accepts keys of any length, so this arm is unreachable.
        return Err(VerifyError::SignatureMismatch);
    };
    mac.update(&signed_payload(timestamp, raw_body));

    // verify_slice runs in constant time over the digest contents.
    mac.verify_slice(&claimed)
        .map_err(|_| VerifyError::SignatureMismatch)
}

/// Freshness gate: accepts only timestamps within `tolerance_seconds` of
/// `now`, boundary inclusive in both directions. Pure, no crypto.
pub fn check_freshness(
    timestamp: &str,
    tolerance_seconds: u64,
    now: u64,
) -> Result<(), VerifyError> {
    let claimed: u64 = timestamp
        .parse()
        .map_err(|_| VerifyError::MalformedTimestamp)?;

    if now.abs_diff(claimed) > tolerance_seconds {
        return Err(VerifyError::StaleOrFutureTimestamp);
    }

    Ok(())
}

/// Canonical signed payload: the timestamp exactly as its header bytes
/// arrived, a single ASCII period, then the raw body. Re-formatting the
/// timestamp (leading zeros, width) would break verification for senders
/// that pad, so the received string is used as-is.
pub fn signed_payload(timestamp: &str, raw_body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(timestamp.len() + 1 + raw_body.len());
    payload.extend_from_slice(timestamp.as_bytes());
    payload.push(b'.');
    payload.extend_from_slice(raw_body);
    payload
}

/// Sender-side digest for `"{timestamp}.{raw_body}"`, lowercase hex.
///
/// The sandbox uses this to sign outbound callbacks; tests use it to build
/// known-valid requests.
pub fn sign(secret: &[u8], timestamp: &str, raw_body: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts keys of any length");
    mac.update(&signed_payload(timestamp, raw_body));
    hex::encode(mac.finalize().into_bytes())
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"whsec_test";
    const NOW: u64 = 1_700_000_000;

    fn valid_request(body: &[u8], timestamp: u64) -> (String, String) {
        let ts = timestamp.to_string();
        let sig = sign(SECRET, &ts, body);
        (sig, ts)
    }

    #[test]
    fn accepts_correctly_signed_payload() {
        let body = br#"{"event":"task.completed"}"#;
        let (sig, ts) = valid_request(body, NOW);

        let result = verify_at(
            body,
            &sig,
            &ts,
            SECRET,
            DEFAULT_TOLERANCE_SECONDS,
            SignatureEncoding::Hex,
            NOW,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn freshness_boundary_is_inclusive() {
        assert_eq!(check_freshness(&(NOW - 300).to_string(), 300, NOW), Ok(()));
        assert_eq!(check_freshness(&(NOW + 300).to_string(), 300, NOW), Ok(()));
        assert_eq!(
            check_freshness(&(NOW - 301).to_string(), 300, NOW),
            Err(VerifyError::StaleOrFutureTimestamp)
        );
        assert_eq!(
            check_freshness(&(NOW + 301).to_string(), 300, NOW),
            Err(VerifyError::StaleOrFutureTimestamp)
        );
    }

    #[test]
    fn rejects_non_numeric_timestamp() {
        assert_eq!(
            check_freshness("not-a-number", 300, NOW),
            Err(VerifyError::MalformedTimestamp)
        );
        assert_eq!(
            check_freshness("", 300, NOW),
            Err(VerifyError::MalformedTimestamp)
        );
        assert_eq!(
            check_freshness("-5", 300, NOW),
            Err(VerifyError::MalformedTimestamp)
        );
    }

    #[test]
    fn padded_timestamp_verifies_with_its_original_bytes() {
        // A sender that zero-pads must still verify: the signed payload has
        // to reuse the received string, not a re-formatted integer.
        let body = b"payload";
        let ts = format!("0{NOW}");
        let sig = sign(SECRET, &ts, body);

        let result = verify_at(body, &sig, &ts, SECRET, 300, SignatureEncoding::Hex, NOW);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejects_undecodable_signature() {
        let body = b"payload";
        let ts = NOW.to_string();

        let result = verify_at(
            body,
            "zz-not-hex",
            &ts,
            SECRET,
            300,
            SignatureEncoding::Hex,
            NOW,
        );
        assert_eq!(result, Err(VerifyError::MalformedSignature));
    }

    #[test]
    fn truncated_signature_is_a_mismatch_not_a_panic() {
        let body = b"payload";
        let (sig, ts) = valid_request(body, NOW);
        let truncated = &sig[..sig.len() - 2];

        let result = verify_at(body, truncated, &ts, SECRET, 300, SignatureEncoding::Hex, NOW);
        assert_eq!(result, Err(VerifyError::SignatureMismatch));
    }

    #[test]
    fn freshness_gate_runs_before_signature_checks() {
        // Garbage signature with a stale timestamp reports the staleness,
        // proving no signature work happened for an already-dead request.
        let ts = (NOW - 600).to_string();
        let result = verify_at(
            b"body",
            "zz-not-hex",
            &ts,
            SECRET,
            300,
            SignatureEncoding::Hex,
            NOW,
        );
        assert_eq!(result, Err(VerifyError::StaleOrFutureTimestamp));
    }

    #[test]
    fn utf8_raw_mode_compares_header_bytes_against_digest() {
        let body = b"payload";
        let ts = NOW.to_string();
        let hex_sig = sign(SECRET, &ts, body);

        // The hex string itself is not the raw digest, so raw mode rejects it.
        let result = verify_at(
            body,
            &hex_sig,
            &ts,
            SECRET,
            300,
            SignatureEncoding::Utf8Raw,
            NOW,
        );
        assert_eq!(result, Err(VerifyError::SignatureMismatch));
    }

    #[test]
    fn signed_payload_is_timestamp_dot_body() {
        assert_eq!(signed_payload("123", b"abc"), b"123.abc".to_vec());
        assert_eq!(signed_payload("0", b""), b"0.".to_vec());
    }
}
