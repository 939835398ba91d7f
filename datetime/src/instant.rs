// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Millisecond-precision UTC instants.

use std::fmt;
use std::str::FromStr;

use jiff::civil;
use jiff::{SignedDuration, Timestamp};

use crate::error::DateTimeError;
use crate::grammar::DateTimeString;

/// Smallest accepted Unix timestamp, in seconds.
pub const UNIX_SECONDS_MIN: f64 = -2_147_483_648.0;

/// Largest accepted Unix timestamp, in seconds.
pub const UNIX_SECONDS_MAX: f64 = 2_147_483_647.0;

const UNIX_EPOCH_CIVIL: civil::DateTime = civil::DateTime::constant(1970, 1, 1, 0, 0, 0, 0);

/// An absolute point in time, in UTC, with millisecond resolution.
///
/// Any signed 64-bit count of milliseconds since the Unix epoch is an
/// instant, but only those from `0000-01-01T00:00:00.000Z` through
/// `9999-12-31T23:59:59.999Z` have a canonical text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    /// The Unix epoch, `1970-01-01T00:00:00.000Z`.
    pub const UNIX_EPOCH: Self = Self(0);

    /// Create an instant from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Create an instant from a civil date-time read as UTC, discarding any
    /// precision finer than a millisecond.
    ///
    /// ## Errors
    ///
    /// Returns [`DateTimeError::InvalidInstant`] if the value does not fit in
    /// 64-bit milliseconds.
    pub fn from_civil(dt: civil::DateTime) -> Result<Self, DateTimeError> {
        let millis = dt.duration_since(UNIX_EPOCH_CIVIL).as_millis();
        i64::try_from(millis)
            .map(Self)
            .map_err(|e| DateTimeError::InvalidInstant {
                reason: e.to_string(),
            })
    }

    /// Create an instant from a 32-bit Unix timestamp in seconds.
    ///
    /// Fractional seconds are truncated toward zero at millisecond precision,
    /// so `876535.8321` keeps `832` milliseconds.
    ///
    /// ## Errors
    ///
    /// Returns [`DateTimeError::InvalidTimestamp`] if the value is NaN,
    /// infinite, or outside `[-2147483648, 2147483647]`.
    pub fn from_unix_seconds(seconds: f64) -> Result<Self, DateTimeError> {
        if !seconds.is_finite() || !(UNIX_SECONDS_MIN..=UNIX_SECONDS_MAX).contains(&seconds) {
            return Err(DateTimeError::InvalidTimestamp { value: seconds });
        }

        // Bounded by the range check above, so the cast is exact
        #[expect(clippy::cast_possible_truncation)]
        let millis = (seconds * 1000.0).trunc() as i64;
        Ok(Self(millis))
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// The instant as a [`jiff::Timestamp`].
    ///
    /// ## Errors
    ///
    /// Returns [`DateTimeError::InvalidInstant`] if the instant is outside
    /// the range of [`jiff::Timestamp`], which ends shortly before the last
    /// day of year 9999.
    pub fn timestamp(self) -> Result<Timestamp, DateTimeError> {
        Timestamp::from_millisecond(self.0).map_err(|e| DateTimeError::InvalidInstant {
            reason: e.to_string(),
        })
    }

    /// The civil date and time of this instant in UTC.
    ///
    /// ## Errors
    ///
    /// Returns [`DateTimeError::InvalidInstant`] if the instant is outside
    /// the civil range of years -9999 to 9999.
    pub fn civil_date_time(self) -> Result<civil::DateTime, DateTimeError> {
        UNIX_EPOCH_CIVIL
            .checked_add(SignedDuration::from_millis(self.0))
            .map_err(|e| DateTimeError::InvalidInstant {
                reason: e.to_string(),
            })
    }

    /// Format as `YYYY-MM-DDTHH:mm:ss.sssZ`.
    ///
    /// ## Errors
    ///
    /// Returns [`DateTimeError::InvalidInstant`] if the year does not fit in
    /// four digits.
    pub fn to_canonical(self) -> Result<String, DateTimeError> {
        let dt = self.civil_date_time()?;
        if !(0..=9999).contains(&dt.year()) {
            return Err(DateTimeError::InvalidInstant {
                reason: format!("year {} has no four-digit form", dt.year()),
            });
        }

        Ok(format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.millisecond(),
        ))
    }
}

impl From<Timestamp> for Instant {
    fn from(value: Timestamp) -> Self {
        Self(value.as_millisecond())
    }
}

impl TryFrom<Instant> for Timestamp {
    type Error = DateTimeError;

    fn try_from(value: Instant) -> Result<Self, Self::Error> {
        value.timestamp()
    }
}

impl FromStr for Instant {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<DateTimeString>().map(|a| a.instant())
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.to_canonical(), self.civil_date_time()) {
            (Ok(text), _) => f.write_str(&text),
            // Negative years fall back to the extended ISO 8601 form
            (Err(_), Ok(dt)) => write!(f, "{dt:.3}Z"),
            (Err(_), Err(_)) => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let text = self.to_canonical().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct InstantVisitor;

        impl serde::de::Visitor<'_> for InstantVisitor {
            type Value = Instant;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a date-time string such as 2016-02-01T00:00:00.000Z")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(InstantVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn canonical(seconds: f64) -> String {
        Instant::from_unix_seconds(seconds)
            .unwrap()
            .to_canonical()
            .unwrap()
    }

    #[test]
    fn converts_unix_seconds() {
        #[rustfmt::skip]
        let success_cases = [
            (0.0,              "1970-01-01T00:00:00.000Z"),
            (854_325_678.0,    "1997-01-27T00:41:18.000Z"),
            (876_535.0,        "1970-01-11T03:28:55.000Z"),
            (876_535.8,        "1970-01-11T03:28:55.800Z"),
            (876_535.832_1,    "1970-01-11T03:28:55.832Z"), // truncated, not rounded
            (-876_535.8,       "1969-12-21T20:31:04.200Z"),
            (2_147_483_647.0,  "2038-01-19T03:14:07.000Z"),
            (-2_147_483_648.0, "1901-12-13T20:45:52.000Z"),
        ];
        for (seconds, expected) in success_cases {
            assert_eq!(canonical(seconds), expected, "Failed for {seconds}");
        }

        let fail_cases = [
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            2_147_483_648.0,
            -2_147_483_649.0,
            2_147_483_647.5,
        ];
        for seconds in fail_cases {
            let err = Instant::from_unix_seconds(seconds).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidTimestamp, "Failed for {seconds}");
        }
    }

    #[test]
    fn formats_canonical_text() {
        #[rustfmt::skip]
        let cases = [
            (0,                  "1970-01-01T00:00:00.000Z"),
            (1_451_606_400_000,  "2016-01-01T00:00:00.000Z"),
            (1_451_659_690_003,  "2016-01-01T14:48:10.003Z"),
            (-62_167_219_200_000, "0000-01-01T00:00:00.000Z"),
            (253_402_207_200_000, "9999-12-30T22:00:00.000Z"),
            (253_402_214_400_000, "9999-12-31T00:00:00.000Z"),
            (253_402_300_799_999, "9999-12-31T23:59:59.999Z"),
        ];
        for (millis, expected) in cases {
            let instant = Instant::from_millis(millis);
            assert_eq!(instant.to_canonical().unwrap(), expected);
            assert_eq!(instant.to_string(), expected);
            assert_eq!(instant.as_millis(), millis);
        }
    }

    #[test]
    fn rejects_years_without_four_digit_form() {
        for millis in [-62_167_219_200_001, 253_402_300_800_000] {
            let instant = Instant::from_millis(millis);
            let err = instant.to_canonical().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInstant, "Failed for {millis}");
        }

        let instant = Instant::from_millis(-62_167_219_200_001);
        assert!(instant.to_string().starts_with('-'));
    }

    #[test]
    fn rejects_millis_outside_civil_range() {
        for millis in [i64::MAX, i64::MIN] {
            let instant = Instant::from_millis(millis);
            assert_eq!(instant.as_millis(), millis);
            let err = instant.to_canonical().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInstant);
            assert_eq!(instant.to_string(), format!("{millis}ms"));
        }
    }

    #[test]
    fn converts_from_civil() {
        #[rustfmt::skip]
        let cases = [
            (civil::date(1970, 1, 1).at(0, 0, 0, 0),            0),
            (civil::date(1969, 12, 31).at(23, 59, 59, 999_000_000), -1),
            (civil::date(9999, 12, 31).at(23, 59, 59, 999_000_000), 253_402_300_799_999),
            (civil::date(0, 1, 1).at(0, 0, 0, 0),               -62_167_219_200_000),
        ];
        for (dt, millis) in cases {
            let instant = Instant::from_civil(dt).unwrap();
            assert_eq!(instant.as_millis(), millis, "Failed for {dt}");
            assert_eq!(instant.civil_date_time().unwrap(), dt, "Failed for {dt}");
        }
    }

    #[test]
    fn converts_timestamps() {
        let ts = Timestamp::from_nanosecond(1_451_659_690_003_999_999).unwrap();
        let instant = Instant::from(ts);
        assert_eq!(instant.as_millis(), 1_451_659_690_003);
        assert_eq!(instant.timestamp().unwrap().subsec_nanosecond(), 3_000_000);

        // Past the end of jiff::Timestamp, yet still canonical
        let instant = Instant::from_millis(253_402_300_799_999);
        let err = Timestamp::try_from(instant).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInstant);
        assert_eq!(instant.to_string(), "9999-12-31T23:59:59.999Z");
    }
}
