// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Strict date-time scalar: validate, parse and serialize UTC timestamps at an
//! API boundary.
//!
//! Text input must match `YYYY-MM-DDTHH[:mm[:ss[.sss]]]Z`, and output is
//! always the canonical `YYYY-MM-DDTHH:mm:ss.sssZ` form.
//!
//! ```
//! # use isoscalar_datetime::{LiteralKind, LiteralNode, Value, parse_literal, parse_value, serialize};
//! let instant = parse_value(&Value::from("2016-02-01T24Z")).unwrap();
//! assert_eq!(serialize(&Value::from(instant)).unwrap(), "2016-02-02T00:00:00.000Z");
//!
//! let literal = LiteralNode::new(LiteralKind::Float, Some("5"));
//! assert_eq!(parse_literal(&literal), None);
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod codec;
mod error;
pub mod grammar;
mod instant;
mod scalar;
mod value;

pub use crate::codec::{parse_literal, parse_value, serialize};
pub use crate::error::{DateTimeError, ErrorKind, Operation};
pub use crate::grammar::{CalendarDate, ClockTime, DateTimeString};
pub use crate::instant::{Instant, UNIX_SECONDS_MAX, UNIX_SECONDS_MIN};
pub use crate::scalar::{DateTimeScalar, Scalar};
pub use crate::value::{LiteralKind, LiteralNode, Value, ValueKind};
