// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while converting date-time values.

use crate::instant::{UNIX_SECONDS_MAX, UNIX_SECONDS_MIN};
use crate::value::ValueKind;

/// The codec operation that rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
pub enum Operation {
    /// Conversion of an application value into canonical text.
    #[strum(serialize = "serialize")]
    Serialize,

    /// Conversion of an input value into an instant.
    #[strum(serialize = "parse")]
    ParseValue,
}

/// Error returned by [`serialize`](crate::serialize) and
/// [`parse_value`](crate::parse_value).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateTimeError {
    /// The input shape is not accepted by the operation.
    #[error("DateTime cannot {operation} a {found} value")]
    UnsupportedInputType {
        /// The operation that rejected the value
        operation: Operation,
        /// The shape of the rejected value
        found: ValueKind,
    },

    /// The text does not match the date-time grammar, or names an impossible
    /// calendar date.
    #[error("DateTime cannot represent an invalid date-time string '{value}': {reason}")]
    InvalidDateTimeString {
        /// The rejected text
        value: String,
        /// The first grammar failure
        reason: String,
    },

    /// The numeric timestamp is not a finite number of seconds within the
    /// 32-bit signed Unix range.
    #[error(
        "DateTime cannot represent an invalid Unix timestamp {value}, expected seconds in [{min}, {max}]",
        min = UNIX_SECONDS_MIN,
        max = UNIX_SECONDS_MAX
    )]
    InvalidTimestamp {
        /// The rejected number of seconds
        value: f64,
    },

    /// The instant cannot be expressed as canonical text.
    #[error("DateTime cannot represent an invalid instant: {reason}")]
    InvalidInstant {
        /// Why the instant was rejected
        reason: String,
    },
}

impl DateTimeError {
    /// Returns the fieldless kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedInputType { .. } => ErrorKind::UnsupportedInputType,
            Self::InvalidDateTimeString { .. } => ErrorKind::InvalidDateTimeString,
            Self::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
            Self::InvalidInstant { .. } => ErrorKind::InvalidInstant,
        }
    }
}

/// Kind of a [`DateTimeError`], for matching without the carried context.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// See [`DateTimeError::UnsupportedInputType`].
    UnsupportedInputType,
    /// See [`DateTimeError::InvalidDateTimeString`].
    InvalidDateTimeString,
    /// See [`DateTimeError::InvalidTimestamp`].
    InvalidTimestamp,
    /// See [`DateTimeError::InvalidInstant`].
    InvalidInstant,
}
