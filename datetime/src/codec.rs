// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Conversions between input values, instants and canonical text.

use crate::error::{DateTimeError, Operation};
use crate::grammar::DateTimeString;
use crate::instant::Instant;
use crate::value::{LiteralKind, LiteralNode, Value};

/// Convert an application value into canonical text for the wire.
///
/// Accepts an [`Instant`], a Unix timestamp in seconds, or text that already
/// matches the date-time grammar. Valid text is returned unchanged.
///
/// ## Errors
///
/// - [`DateTimeError::InvalidInstant`] if the instant has no canonical form.
/// - [`DateTimeError::InvalidTimestamp`] if the number is not a finite 32-bit
///   Unix timestamp.
/// - [`DateTimeError::InvalidDateTimeString`] if the text is rejected.
/// - [`DateTimeError::UnsupportedInputType`] for any other shape.
///
/// ## Examples
///
/// ```
/// # use isoscalar_datetime::{Value, serialize};
/// assert_eq!(serialize(&Value::from(2_147_483_647)).unwrap(), "2038-01-19T03:14:07.000Z");
/// assert_eq!(serialize(&Value::from("2016-02-01T00Z")).unwrap(), "2016-02-01T00Z");
/// assert!(serialize(&Value::Null).is_err());
/// ```
pub fn serialize(value: &Value<'_>) -> Result<String, DateTimeError> {
    let result = match value {
        Value::Instant(instant) => instant.to_canonical(),
        Value::Number(seconds) => Instant::from_unix_seconds(*seconds)?.to_canonical(),
        Value::String(text) => text
            .parse::<DateTimeString>()
            .map(|_| text.clone().into_owned()),
        Value::Undefined | Value::Null | Value::Boolean(_) | Value::List(_) | Value::Object(_) => {
            Err(unsupported(Operation::Serialize, value))
        }
    };

    match &result {
        Ok(text) => tracing::trace!(text, "serialized date-time"),
        Err(err) => tracing::debug!(kind = %err.kind(), %err, "failed to serialize date-time"),
    }
    result
}

/// Convert a request input value into an [`Instant`].
///
/// Only text is accepted here; numbers and instants are rejected even though
/// [`serialize`] takes them.
///
/// ## Errors
///
/// - [`DateTimeError::InvalidDateTimeString`] if the text is rejected.
/// - [`DateTimeError::UnsupportedInputType`] for any non-text value.
pub fn parse_value(value: &Value<'_>) -> Result<Instant, DateTimeError> {
    let result = match value {
        Value::String(text) => text.parse::<DateTimeString>().map(|a| a.instant()),
        _ => Err(unsupported(Operation::ParseValue, value)),
    };

    match &result {
        Ok(instant) => tracing::trace!(%instant, "parsed date-time value"),
        Err(err) => tracing::debug!(kind = %err.kind(), %err, "failed to parse date-time value"),
    }
    result
}

/// Convert a query literal into an [`Instant`].
///
/// Returns `None` both for literals that are not strings and for strings the
/// grammar rejects; this never fails.
#[must_use]
pub fn parse_literal(node: &LiteralNode<'_>) -> Option<Instant> {
    match (node.kind, node.value) {
        (LiteralKind::String, Some(text)) => match text.parse::<DateTimeString>() {
            Ok(parsed) => Some(parsed.instant()),
            Err(err) => {
                tracing::debug!(%err, "ignoring invalid date-time literal");
                None
            }
        },
        (kind, _) => {
            tracing::debug!(%kind, "ignoring non-string date-time literal");
            None
        }
    }
}

fn unsupported(operation: Operation, value: &Value<'_>) -> DateTimeError {
    DateTimeError::UnsupportedInputType {
        operation,
        found: value.kind(),
    }
}
