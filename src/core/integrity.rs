//! Corruption detector for the persisted collection.
//!
//! The token is a 32-bit rolling hash over the serialized records. It flags
//! accidental damage or hand edits between sessions; anyone who knows the
//! function can recompute it, so it is not a security control. A mismatch is
//! only ever reported, never acted upon.

use crate::models::TimeLogRecord;
use crate::storage::{CHECKSUM_KEY, KeyValueStorage};
use tracing::{error, warn};

/// Token for a collection.
///
/// Each UTF-16 code unit of the compact JSON form is folded in as
/// `hash = hash * 31 + unit` with signed 32-bit wraparound. The result is
/// rendered as signed hexadecimal (`-1ee33337`, `4c43aa9d`).
pub fn checksum(records: &[TimeLogRecord]) -> String {
    let serialized = serialize(records);

    let hash = serialized
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));

    if hash < 0 {
        format!("-{:x}", hash.unsigned_abs())
    } else {
        format!("{:x}", hash)
    }
}

/// Compact JSON, the same text the store writes.
pub(crate) fn serialize(records: &[TimeLogRecord]) -> String {
    // Plain strings in a derived struct cannot fail to serialize.
    serde_json::to_string(records).unwrap_or_default()
}

/// Compare the collection against the stored token.
///
/// With no stored token the current state becomes the trusted baseline and
/// the check passes. A read failure counts as a mismatch.
pub fn validate<S: KeyValueStorage + ?Sized>(storage: &mut S, records: &[TimeLogRecord]) -> bool {
    let current = checksum(records);

    match storage.get(CHECKSUM_KEY) {
        Ok(Some(stored)) => {
            let ok = stored == current;
            if !ok {
                warn!(%stored, %current, "integrity checksum mismatch");
            }
            ok
        }
        Ok(None) => {
            if let Err(e) = storage.set(CHECKSUM_KEY, &current) {
                error!(error = %e, "failed to store baseline checksum");
            }
            true
        }
        Err(e) => {
            error!(error = %e, "failed to read integrity checksum");
            false
        }
    }
}

/// Recompute and persist the token. Only called after a successful write.
pub fn update_checksum<S: KeyValueStorage + ?Sized>(storage: &mut S, records: &[TimeLogRecord]) {
    if let Err(e) = storage.set(CHECKSUM_KEY, &checksum(records)) {
        error!(error = %e, "failed to update integrity checksum");
    }
}
