// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The 8-symbol encoding alphabet and its derived lookup tables.
//!
//! Symbol `i` of [`ENCODE_ALPHABET`] maps bijectively to the 3-bit value
//! `i` (0–7).  [`PREDECESSOR_ALPHABET`] and [`SUCCESSOR_ALPHABET`] hold,
//! for each symbol, the symbol whose value is one less / one more modulo 8;
//! the neighbor navigator uses them for carry-free single-digit stepping.

use crate::error::{TimeHashError, TimeHashResult};

/// Symbol table: index → symbol, symbol → 3-bit value.
pub const ENCODE_ALPHABET: &str = "01abcdef";

/// For each symbol of [`ENCODE_ALPHABET`], the symbol with value `(i − 1) mod 8`.
pub const PREDECESSOR_ALPHABET: &str = "f01abcde";

/// For each symbol of [`ENCODE_ALPHABET`], the symbol with value `(i + 1) mod 8`.
pub const SUCCESSOR_ALPHABET: &str = "1abcdef0";

/// Symbol carrying the lowest 3-bit value.
pub(crate) const MIN_SYMBOL: char = '0';

/// Symbol carrying the highest 3-bit value.
pub(crate) const MAX_SYMBOL: char = 'f';

/// 3-bit value of `symbol`, or `None` when it is outside the alphabet.
pub(crate) const fn symbol_value(symbol: char) -> Option<u8> {
    match symbol {
        '0' => Some(0),
        '1' => Some(1),
        'a' => Some(2),
        'b' => Some(3),
        'c' => Some(4),
        'd' => Some(5),
        'e' => Some(6),
        'f' => Some(7),
        _ => None,
    }
}

/// Symbol for a 3-bit value.  `value` must be below 8.
pub(crate) fn value_symbol(value: u8) -> char {
    ENCODE_ALPHABET.as_bytes()[value as usize] as char
}

/// Map every character of `hash` to its 3-bit value.
///
/// Fails with [`TimeHashError::InvalidSymbol`] on the first character that
/// is not a member of the alphabet.
pub(crate) fn parse_values(hash: &str) -> TimeHashResult<Vec<u8>> {
    hash.chars()
        .map(|symbol| symbol_value(symbol).ok_or(TimeHashError::InvalidSymbol { symbol }))
        .collect()
}

/// True iff every character of `hash` is a member of the alphabet.
///
/// This checks character membership only; it says nothing about the length
/// of the hash or the interval it denotes.  The empty string is valid.
pub fn validate(hash: &str) -> bool {
    hash.chars().all(|symbol| symbol_value(symbol).is_some())
}
