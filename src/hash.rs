// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The decoded-interval value type.
//!
//! [`TimeHash`] binds a hash string to the interval it decodes to: the
//! midpoint in epoch seconds and the half-width error margin.  Instances
//! are immutable; stepping produces new instances through the neighbor
//! navigator.
//!
//! # Equality versus ordering
//!
//! Two instances are equal iff their **hash strings** are equal, while the
//! comparison operators order by **decoded center** only.  The split is
//! intentional: equality reflects hash identity, ordering reflects time
//! position.  Hashes of different precision can therefore satisfy both
//! `a <= b` and `b <= a` without being equal, and `partial_cmp` returning
//! `Ordering::Equal` does not imply `==`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use qtty::Seconds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alphabet;
use crate::codec;
use crate::error::{TimeHashError, TimeHashResult};
use crate::neighbor;

/// A hash string together with the fuzzy time interval it denotes.
#[derive(Debug, Clone)]
pub struct TimeHash {
    hash_code: String,
    center: Seconds,
    error: Seconds,
}

impl TimeHash {
    // ── constructors ──────────────────────────────────────────────────

    /// Decode `hash_code` into an interval record.
    ///
    /// Fails with [`TimeHashError::InvalidSymbol`] if any character falls
    /// outside the `01abcdef` alphabet.  The empty hash is valid and
    /// denotes the whole window.
    pub fn new(hash_code: &str) -> TimeHashResult<Self> {
        let values = alphabet::parse_values(hash_code)?;
        let (center, error) = codec::decode_values(&values);
        Ok(Self::from_parts(hash_code.to_owned(), center, error))
    }

    /// Encode a timestamp in epoch seconds at the given precision.
    pub fn from_epoch_seconds(epoch_seconds: f64, precision: usize) -> Self {
        let values = codec::encode_values(epoch_seconds, precision);
        let (center, error) = codec::decode_values(&values);
        let hash_code = values.into_iter().map(alphabet::value_symbol).collect();
        Self::from_parts(hash_code, center, error)
    }

    /// Encode a `chrono` UTC timestamp at the given precision.
    pub fn from_utc(datetime: DateTime<Utc>, precision: usize) -> Self {
        let epoch_seconds =
            datetime.timestamp() as f64 + datetime.timestamp_subsec_nanos() as f64 / 1e9;
        Self::from_epoch_seconds(epoch_seconds, precision)
    }

    /// Build from fields that already went through the codec upstream.
    fn from_parts(hash_code: String, center: f64, error: f64) -> Self {
        Self {
            hash_code,
            center: Seconds::new(center),
            error: Seconds::new(error),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The originating hash string.
    pub fn hash_code(&self) -> &str {
        &self.hash_code
    }

    /// Precision of this hash: its character count.
    pub fn precision(&self) -> usize {
        self.hash_code.len()
    }

    /// Midpoint of the denoted interval, in epoch seconds.
    pub fn center(&self) -> Seconds {
        self.center
    }

    /// Midpoint as a raw scalar.
    pub fn center_value(&self) -> f64 {
        self.center.value()
    }

    /// Half-width of the denoted interval.
    pub fn error(&self) -> Seconds {
        self.error
    }

    /// Half-width as a raw scalar.
    pub fn error_value(&self) -> f64 {
        self.error.value()
    }

    /// Lower bound of the denoted interval: `center − error`.
    pub fn start(&self) -> Seconds {
        self.center - self.error
    }

    /// Upper bound of the denoted interval: `center + error`.
    pub fn end(&self) -> Seconds {
        self.center + self.error
    }

    /// The interval midpoint as a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable
    /// range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let epoch_seconds = self.center.value();
        let secs = epoch_seconds.floor() as i64;
        let nanos = ((epoch_seconds - secs as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    // ── stepping ──────────────────────────────────────────────────────

    /// The interval `n` steps earlier at the same precision.
    ///
    /// `n = 0` returns an instance equal to `self`.  Stepping below the
    /// start of the time window fails with
    /// [`TimeHashError::WindowExhausted`].
    ///
    /// ```
    /// use timehash::TimeHash;
    ///
    /// let th = TimeHash::new("a10")?;
    /// assert_eq!(th.step_before(1)?.hash_code(), "a0f");
    /// # Ok::<(), timehash::TimeHashError>(())
    /// ```
    pub fn step_before(&self, n: usize) -> TimeHashResult<Self> {
        self.step(n, neighbor::before)
    }

    /// The interval `n` steps later at the same precision.
    ///
    /// `n = 0` returns an instance equal to `self`.  Stepping past the end
    /// of the time window fails with [`TimeHashError::WindowExhausted`].
    pub fn step_after(&self, n: usize) -> TimeHashResult<Self> {
        self.step(n, neighbor::after)
    }

    fn step(
        &self,
        n: usize,
        advance: fn(&str) -> TimeHashResult<Option<String>>,
    ) -> TimeHashResult<Self> {
        let mut hash_code = self.hash_code.clone();
        for _ in 0..n {
            hash_code = advance(&hash_code)?.ok_or(TimeHashError::WindowExhausted)?;
        }
        Self::new(&hash_code)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl fmt::Display for TimeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash_code)
    }
}

// ── FromStr ───────────────────────────────────────────────────────────────

impl FromStr for TimeHash {
    type Err = TimeHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── Equality / ordering ───────────────────────────────────────────────────

// Equality is hash identity, not time position (see module docs).
impl PartialEq for TimeHash {
    fn eq(&self, other: &Self) -> bool {
        self.hash_code == other.hash_code
    }
}

impl Eq for TimeHash {}

impl std::hash::Hash for TimeHash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.hash_code.hash(state);
    }
}

// Ordering compares decoded centers only, so it can report `Equal` for
// instances that `==` considers distinct (see module docs).
impl PartialOrd for TimeHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.center.partial_cmp(&other.center)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

// The hash string is the only wire format; center and error are
// recomputed on deserialization.
#[cfg(feature = "serde")]
impl Serialize for TimeHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.hash_code)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hash_code = String::deserialize(deserializer)?;
        Self::new(&hash_code).map_err(serde::de::Error::custom)
    }
}
