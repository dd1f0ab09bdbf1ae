// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy of the codec.
//!
//! Failures are signalled immediately to the caller; nothing is retried,
//! logged, or substituted with a default value.

use thiserror::Error;

/// Failures surfaced by decoding, navigation, and stepping.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeHashError {
    /// A character outside the `01abcdef` alphabet was encountered.
    #[error("invalid symbol '{symbol}' (expected one of \"01abcdef\")")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },

    /// A stepping operation was asked to move past the representable
    /// time window (below 1970-01-01 or beyond 2098-01-01).
    #[error("no adjacent hash exists at this precision: time window exhausted")]
    WindowExhausted,
}

/// Result alias used across the crate.
pub type TimeHashResult<T> = Result<T, TimeHashError>;
