// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Interval-halving encode / decode over the fixed time window.
//!
//! Encoding performs a binary search over `[TIME_INTERVAL_START,
//! TIME_INTERVAL_END]`: each bit records whether the input lies in the
//! upper half of the remaining interval, and bits are packed three at a
//! time (masks 4, 2, 1, most significant first) into one alphabet symbol.
//! Decoding replays the same subdivision from the symbol values and keeps
//! the shrinking half-width alongside, so the result carries both the
//! interval midpoint and its error margin.

use chrono::{DateTime, Utc};

use crate::alphabet;
use crate::error::TimeHashResult;
use crate::hash::TimeHash;

/// Lower bound of the representable window: 1970-01-01T00:00:00Z.
pub const TIME_INTERVAL_START: f64 = 0.0;

/// Upper bound of the representable window: 2098-01-01T00:00:00Z,
/// expressed in epoch seconds.
pub const TIME_INTERVAL_END: f64 = 4_039_372_800.0;

/// Hash length giving ±1.88 s resolution.
pub const DEFAULT_PRECISION: usize = 10;

/// Per-symbol bit masks, most significant bit first.
const BIT_MASKS: [u8; 3] = [4, 2, 1];

/// Encode `epoch_seconds` into the 3-bit symbol values of a hash of
/// length `precision`.
pub(crate) fn encode_values(epoch_seconds: f64, precision: usize) -> Vec<u8> {
    let mut start = TIME_INTERVAL_START;
    let mut end = TIME_INTERVAL_END;
    let mut values = Vec::with_capacity(precision);
    let mut value: u8 = 0;
    let mut bit = 0;

    while values.len() < precision {
        let mid = (start + end) / 2.0;
        // Ties resolve to the lower half: only a strictly greater input
        // sets the bit.  This fixes rounding at exact boundaries.
        if epoch_seconds > mid {
            value |= BIT_MASKS[bit];
            start = mid;
        } else {
            end = mid;
        }

        if bit < 2 {
            bit += 1;
        } else {
            values.push(value);
            bit = 0;
            value = 0;
        }
    }

    values
}

/// Replay the subdivision for `values`, yielding `(center, error)`.
pub(crate) fn decode_values(values: &[u8]) -> (f64, f64) {
    let mut start = TIME_INTERVAL_START;
    let mut end = TIME_INTERVAL_END;
    let mut error = (TIME_INTERVAL_START + TIME_INTERVAL_END) / 2.0;

    for &value in values {
        for mask in BIT_MASKS {
            error /= 2.0;
            let mid = (start + end) / 2.0;
            if value & mask != 0 {
                start = mid;
            } else {
                end = mid;
            }
        }
    }

    ((start + end) / 2.0, error)
}

/// Encode a timestamp in epoch seconds to a hash of length `precision`.
///
/// A `precision` of zero yields the empty hash, a degenerate but valid
/// encoding of the whole window.  The input is never validated against the
/// window: out-of-window timestamps silently saturate to the interval
/// extremes (all-`0` below, all-`f` above).
///
/// ```
/// use timehash::{decode, encode};
///
/// let hash = encode(1_000_000_000.0, 10);
/// let center = decode(&hash)?;
/// assert!((center - 1_000_000_000.0).abs() <= 1.89); // ±1.88 s at 10 chars
/// # Ok::<(), timehash::TimeHashError>(())
/// ```
pub fn encode(epoch_seconds: f64, precision: usize) -> String {
    encode_values(epoch_seconds, precision)
        .into_iter()
        .map(alphabet::value_symbol)
        .collect()
}

/// Encode a `chrono` UTC timestamp to a hash of length `precision`.
///
/// The timestamp is converted to fractional epoch seconds first, then
/// encoded exactly like [`encode`].
pub fn encode_utc(datetime: DateTime<Utc>, precision: usize) -> String {
    let epoch_seconds =
        datetime.timestamp() as f64 + datetime.timestamp_subsec_nanos() as f64 / 1e9;
    encode(epoch_seconds, precision)
}

/// Decode `hash` to the full interval record: hash code, center, error
/// margin, and the derived start/end bounds.
///
/// Decoding the empty hash yields the window midpoint with an error of
/// half the window width.  Fails with
/// [`TimeHashError::InvalidSymbol`](crate::TimeHashError::InvalidSymbol)
/// on any character outside the alphabet.
pub fn decode_exactly(hash: &str) -> TimeHashResult<TimeHash> {
    TimeHash::new(hash)
}

/// Decode `hash` to the midpoint of the interval it denotes, dropping the
/// error margin.
pub fn decode(hash: &str) -> TimeHashResult<f64> {
    let values = alphabet::parse_values(hash)?;
    let (center, _error) = decode_values(&values);
    Ok(center)
}
