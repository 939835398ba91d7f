// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value shapes exchanged with a hosting API framework.

use std::borrow::Cow;

use crate::instant::Instant;

/// A value handed to the codec, either by the application (for
/// serialization) or by a request (for parsing).
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// No value was supplied at all.
    Undefined,

    /// An explicit null.
    Null,

    /// A boolean.
    Boolean(bool),

    /// A number, interpreted as Unix seconds where numbers are accepted.
    Number(f64),

    /// A text value.
    String(Cow<'a, str>),

    /// An ordered list of values.
    List(Vec<Value<'a>>),

    /// A structured value with named fields.
    Object(Vec<(Cow<'a, str>, Value<'a>)>),

    /// An instant produced by the application.
    Instant(Instant),
}

impl Value<'_> {
    /// The shape of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Object(_) => ValueKind::Object,
            Value::Instant(_) => ValueKind::Instant,
        }
    }

    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::String(Cow::Borrowed(value))
    }
}

impl From<String> for Value<'_> {
    fn from(value: String) -> Self {
        Value::String(Cow::Owned(value))
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value<'_> {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Instant> for Value<'_> {
    fn from(value: Instant) -> Self {
        Value::Instant(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value<'static> {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            // Only arbitrary-precision numbers lack an f64 form
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(Cow::Owned(s)),
            Json::Array(a) => Value::List(a.into_iter().map(Value::from).collect()),
            Json::Object(o) => Value::Object(
                o.into_iter()
                    .map(|(k, v)| (Cow::Owned(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Shape of a [`Value`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    /// See [`Value::Undefined`].
    Undefined,
    /// See [`Value::Null`].
    Null,
    /// See [`Value::Boolean`].
    Boolean,
    /// See [`Value::Number`].
    Number,
    /// See [`Value::String`].
    String,
    /// See [`Value::List`].
    List,
    /// See [`Value::Object`].
    Object,
    /// See [`Value::Instant`].
    Instant,
}

/// A literal from a parsed query document.
///
/// Only string literals carry text the codec looks at; `value` holds the raw
/// source text for every other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralNode<'a> {
    /// The syntax kind of the literal.
    pub kind: LiteralKind,

    /// The literal text, if any.
    pub value: Option<&'a str>,
}

impl<'a> LiteralNode<'a> {
    /// Create a literal of any kind.
    #[must_use]
    pub const fn new(kind: LiteralKind, value: Option<&'a str>) -> Self {
        Self { kind, value }
    }

    /// Create a string literal.
    #[must_use]
    pub const fn string(value: &'a str) -> Self {
        Self::new(LiteralKind::String, Some(value))
    }
}

/// Syntax kinds of query literals, named after their GraphQL AST kinds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum LiteralKind {
    /// A quoted string or block string.
    #[strum(serialize = "StringValue")]
    String,
    /// An integer.
    #[strum(serialize = "IntValue")]
    Int,
    /// A floating point number.
    #[strum(serialize = "FloatValue")]
    Float,
    /// `true` or `false`.
    #[strum(serialize = "BooleanValue")]
    Boolean,
    /// `null`.
    #[strum(serialize = "NullValue")]
    Null,
    /// An unquoted enum name.
    #[strum(serialize = "EnumValue")]
    Enum,
    /// A list literal.
    #[strum(serialize = "ListValue")]
    List,
    /// An object literal.
    #[strum(serialize = "ObjectValue")]
    Object,
    /// A variable reference.
    #[strum(serialize = "Variable")]
    Variable,
}
