// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Adjacent-hash navigation at fixed precision.
//!
//! [`before`] and [`after`] compute the hash denoting the immediately
//! preceding / following interval at the same precision, treating the hash
//! as a mixed-radix-8 number: the scan runs from the least significant
//! symbol toward the most significant one, the first symbol that is not at
//! its extreme value is stepped through the predecessor / successor table,
//! and every symbol to its right rolls over to the opposite extreme.
//!
//! An all-`0` hash has no predecessor and an all-`f` hash has no successor;
//! both report `Ok(None)`.  The `None` sentinel is deliberately distinct
//! from the empty hash, which is a valid degenerate encoding of the whole
//! window rather than an exhaustion marker.

use crate::alphabet::{
    self, MAX_SYMBOL, MIN_SYMBOL, PREDECESSOR_ALPHABET, SUCCESSOR_ALPHABET,
};
use crate::error::TimeHashResult;

/// Hash of the interval immediately preceding `hash` at the same
/// precision, or `None` when `hash` is already the earliest representable
/// interval (all symbols `'0'`).
///
/// ```
/// use timehash::before;
///
/// assert_eq!(before("a10")?, Some("a0f".to_string()));
/// assert_eq!(before("000")?, None);
/// # Ok::<(), timehash::TimeHashError>(())
/// ```
pub fn before(hash: &str) -> TimeHashResult<Option<String>> {
    shifted(hash, MIN_SYMBOL, MAX_SYMBOL, PREDECESSOR_ALPHABET)
}

/// Hash of the interval immediately following `hash` at the same
/// precision, or `None` when `hash` is already the latest representable
/// interval (all symbols `'f'`).
///
/// ```
/// use timehash::after;
///
/// assert_eq!(after("a0f")?, Some("a10".to_string()));
/// assert_eq!(after("fff")?, None);
/// # Ok::<(), timehash::TimeHashError>(())
/// ```
pub fn after(hash: &str) -> TimeHashResult<Option<String>> {
    shifted(hash, MAX_SYMBOL, MIN_SYMBOL, SUCCESSOR_ALPHABET)
}

/// Shared borrow/carry walk for [`before`] and [`after`].
///
/// Symbols equal to `extreme` roll over to `rollover`; the first other
/// symbol (from the right) is replaced through `step_table`.
fn shifted(
    hash: &str,
    extreme: char,
    rollover: char,
    step_table: &str,
) -> TimeHashResult<Option<String>> {
    let values = alphabet::parse_values(hash)?;
    let symbols: Vec<char> = hash.chars().collect();

    for pos in (0..symbols.len()).rev() {
        if symbols[pos] != extreme {
            let mut out: String = symbols[..pos].iter().collect();
            out.push(step_table.as_bytes()[values[pos] as usize] as char);
            out.extend(std::iter::repeat(rollover).take(symbols.len() - pos - 1));
            return Ok(Some(out));
        }
    }

    Ok(None)
}

/// The two hashes adjacent to a given one, excluding the hash itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    /// Hash of the preceding interval, `None` on underflow.
    pub before: Option<String>,
    /// Hash of the following interval, `None` on overflow.
    pub after: Option<String>,
}

/// The hashes of the preceding, current, and following intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    /// Hash of the preceding interval, `None` on underflow.
    pub before: Option<String>,
    /// The hash itself.
    pub center: String,
    /// Hash of the following interval, `None` on overflow.
    pub after: Option<String>,
}

/// Both adjacent hashes of `hash`, excluding `hash` itself.
pub fn neighbors(hash: &str) -> TimeHashResult<Neighbors> {
    Ok(Neighbors {
        before: before(hash)?,
        after: after(hash)?,
    })
}

/// The window of `hash` expanded to include both adjacent hashes.
pub fn expand(hash: &str) -> TimeHashResult<Neighborhood> {
    Ok(Neighborhood {
        before: before(hash)?,
        center: hash.to_owned(),
        after: after(hash)?,
    })
}
