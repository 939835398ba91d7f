// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scalar definition consumed by a hosting API framework.

use crate::codec;
use crate::error::DateTimeError;
use crate::instant::Instant;
use crate::value::{LiteralNode, Value};

/// A custom scalar type as seen by a query-language runtime.
///
/// The runtime calls [`Scalar::serialize`] on results, [`Scalar::parse_value`]
/// on request variables, and [`Scalar::parse_literal`] on inline literals.
pub trait Scalar {
    /// The application-side representation of the scalar.
    type Output;

    /// Name under which the scalar is registered.
    fn name(&self) -> &str;

    /// Human-readable description for schema introspection.
    fn description(&self) -> Option<&str>;

    /// Convert an application value into its wire form.
    ///
    /// ## Errors
    ///
    /// If the value cannot be represented by the scalar.
    fn serialize(&self, value: &Value<'_>) -> Result<String, DateTimeError>;

    /// Convert a request variable into the application-side representation.
    ///
    /// ## Errors
    ///
    /// If the value is not a valid input for the scalar.
    fn parse_value(&self, value: &Value<'_>) -> Result<Self::Output, DateTimeError>;

    /// Convert an inline literal, returning `None` if it is not valid.
    fn parse_literal(&self, node: &LiteralNode<'_>) -> Option<Self::Output>;
}

/// The `DateTime` scalar with its registration metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct DateTimeScalar {
    /// Name of the scalar in the schema.
    #[cfg_attr(feature = "serde", serde(default = "default_name"))]
    pub name: String,

    /// Description of the scalar in the schema.
    #[cfg_attr(feature = "serde", serde(default = "default_description"))]
    pub description: Option<String>,
}

fn default_name() -> String {
    "DateTime".to_string()
}

#[allow(clippy::unnecessary_wraps)]
fn default_description() -> Option<String> {
    Some(
        "A date-time string at UTC, such as 2007-12-03T10:15:30Z, \
compliant with the `date-time` format outlined in section 5.6 of the RFC 3339 \
profile of the ISO 8601 standard for representation of dates and times using \
the Gregorian calendar."
            .to_string(),
    )
}

impl DateTimeScalar {
    /// Create the scalar with the default name and description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registered name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the description, or remove it with `None`.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

impl Default for DateTimeScalar {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
        }
    }
}

impl Scalar for DateTimeScalar {
    type Output = Instant;

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn serialize(&self, value: &Value<'_>) -> Result<String, DateTimeError> {
        codec::serialize(value)
    }

    fn parse_value(&self, value: &Value<'_>) -> Result<Instant, DateTimeError> {
        codec::parse_value(value)
    }

    fn parse_literal(&self, node: &LiteralNode<'_>) -> Option<Instant> {
        codec::parse_literal(node)
    }
}
