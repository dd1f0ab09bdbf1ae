// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TimeHash Module
//!
//! This crate provides a fuzzy-precision representation of a time
//! interval.  A timestamp in epoch seconds is encoded as a short string
//! over the alphabet `{0,1,a,b,c,d,e,f}`; every character subdivides the
//! remaining interval into 8 equal parts, so the character count alone
//! controls precision.  Calculations cover a fixed 128-year window from
//! 1970-01-01 to 2098-01-01; times outside that window are not
//! representable on this scale.
//!
//! # Core API
//!
//! - [`encode`] / [`encode_utc`] — timestamp → hash at a chosen precision.
//! - [`decode`] / [`decode_exactly`] — hash → interval midpoint, or the
//!   full record with error margin.
//! - [`validate`] — alphabet-membership check.
//! - [`before`] / [`after`] / [`neighbors`] / [`expand`] — adjacent hashes
//!   at the same precision.
//! - [`TimeHash`] — immutable value type binding a hash to its decoded
//!   interval, with ordering and stepping.
//!
//! # Precision
//!
//! | Characters | Interval ambiguity |
//! |------------|--------------------|
//! | 0 | ±64 years |
//! | 1 | ±8 years |
//! | 2 | ±1 year |
//! | 3 | ±45.65625 days |
//! | 4 | ±5.707 days |
//! | 5 | ±17.121 hours |
//! | 6 | ±2.14013671875 hours |
//! | 7 | ±16.05 minutes |
//! | 8 | ±2.006378173828125 minutes |
//! | 9 | ±15.05 seconds |
//! | 10 | ±1.88097 seconds |
//!
//! # Example
//!
//! ```
//! use timehash::{decode_exactly, encode, TimeHash};
//!
//! let hash = encode(1_000_000_000.0, 10);
//! let th = decode_exactly(&hash)?;
//! assert!((th.center_value() - 1_000_000_000.0).abs() <= th.error_value());
//!
//! // Walk one interval back and forth at the same precision.
//! let th = TimeHash::new("a10")?;
//! assert_eq!(th.step_before(1)?.hash_code(), "a0f");
//! assert_eq!(th.step_after(1)?.hash_code(), "a11");
//! # Ok::<(), timehash::TimeHashError>(())
//! ```

mod alphabet;
mod codec;
mod error;
mod hash;
mod neighbor;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use alphabet::{validate, ENCODE_ALPHABET, PREDECESSOR_ALPHABET, SUCCESSOR_ALPHABET};
pub use codec::{
    decode, decode_exactly, encode, encode_utc, DEFAULT_PRECISION, TIME_INTERVAL_END,
    TIME_INTERVAL_START,
};
pub use error::{TimeHashError, TimeHashResult};
pub use hash::TimeHash;
pub use neighbor::{after, before, expand, neighbors, Neighborhood, Neighbors};
