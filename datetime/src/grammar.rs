// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parser for date-time strings.
//!
//! Format Definition:  This value type is defined by the following notation:
//!
//! ```txt
//! date-time    = full-date "T" partial-time "Z"
//!
//! full-date    = date-year "-" date-month "-" date-mday
//! date-year    = 4DIGIT
//! date-month   = 2DIGIT        ;01-12
//! date-mday    = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
//!                              ;based on month/year
//!
//! partial-time = time-hour [":" time-minute [":" time-second ["." time-milli]]]
//! time-hour    = 2DIGIT        ;00-24
//! time-minute  = 2DIGIT        ;00-59
//! time-second  = 2DIGIT        ;00-59
//! time-milli   = 3DIGIT        ;000-999
//! ```
//!
//! Hour 24 is only allowed when every following field is zero, and denotes
//! midnight at the start of the next day.

use std::borrow::Cow;
use std::str::FromStr;

use chumsky::Parser;
use chumsky::error::{Rich, RichPattern};
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;
use jiff::civil;

use crate::error::DateTimeError;
use crate::instant::Instant;

/// Failure reasons beyond the character-level grammar.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GrammarExpected {
    /// The day does not exist in that month and year
    Date,
    /// Hour 24 followed by a nonzero minute, second or millisecond
    Hour24,
    /// The resolved instant is outside the supported range
    Instant,
}

impl From<GrammarExpected> for RichPattern<'_, char> {
    fn from(expected: GrammarExpected) -> Self {
        match expected {
            GrammarExpected::Date => Self::Label(Cow::Borrowed("valid calendar date")),
            GrammarExpected::Hour24 => Self::Label(Cow::Borrowed(
                "hour 24 without minutes, seconds or milliseconds",
            )),
            GrammarExpected::Instant => Self::Label(Cow::Borrowed("representable instant")),
        }
    }
}

/// A calendar date as written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    /// Year component, 0000-9999.
    pub year: i16,

    /// Month component, 1-12.
    pub month: i8,

    /// Day component, 1-31.
    pub day: i8,
}

/// A clock time as written in the source text.
///
/// Omitted fields stay `None`, so the terse and the maximal spelling of the
/// same time compare unequal here but resolve to the same [`Instant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Hour component, 0-24.
    pub hour: u8,

    /// Minute component, 0-59.
    pub minute: Option<u8>,

    /// Second component, 0-59.
    pub second: Option<u8>,

    /// Millisecond component, 0-999.
    pub millisecond: Option<u16>,
}

impl ClockTime {
    /// Whether every field after the hour is zero or absent.
    #[must_use]
    pub fn is_on_the_hour(&self) -> bool {
        self.minute.unwrap_or(0) == 0
            && self.second.unwrap_or(0) == 0
            && self.millisecond.unwrap_or(0) == 0
    }
}

/// A validated date-time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeString {
    /// Date component.
    pub date: CalendarDate,

    /// Time component.
    pub time: ClockTime,

    /// Resolved instant, with hour 24 rolled over to the next day
    instant: Instant,
}

impl DateTimeString {
    /// The instant this string denotes.
    #[must_use]
    pub const fn instant(&self) -> Instant {
        self.instant
    }
}

impl FromStr for DateTimeString {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date_time(s).map_err(|errs| DateTimeError::InvalidDateTimeString {
            value: s.to_string(),
            reason: describe(&errs),
        })
    }
}

/// Parse a date-time string, keeping the grammar errors with their spans.
///
/// ## Errors
///
/// If the text is rejected, a vector of errors will be returned.
///
/// ## Examples
///
/// ```
/// # use isoscalar_datetime::grammar::parse_date_time;
/// let parsed = parse_date_time("2016-02-01T24Z").unwrap();
/// assert_eq!(parsed.instant().to_string(), "2016-02-02T00:00:00.000Z");
/// ```
///
/// Rejected text comes with spans that can be rendered as reports
///
/// ```
/// # use isoscalar_datetime::grammar::{error_message, parse_date_time};
/// use ariadne::{Color, Label, Report, ReportKind, Source};
/// let src = "2016-02-01T00:00:00.1Z";
/// let errs = parse_date_time(src).unwrap_err();
/// assert!(!errs.is_empty());
/// for e in errs {
///     Report::build(ReportKind::Error, e.span().into_range())
///         .with_config(ariadne::Config::new().with_index_type(ariadne::IndexType::Byte))
///         .with_message(error_message(&e))
///         .with_label(
///             Label::new(e.span().into_range())
///                 .with_message(error_message(&e))
///                 .with_color(Color::Red),
///         )
///         .finish()
///         .eprint(Source::from(src))
///         .unwrap();
/// }
/// ```
pub fn parse_date_time(src: &str) -> Result<DateTimeString, Vec<Rich<'_, char>>> {
    date_time::<'_, _, extra::Err<Rich<'_, char>>>()
        .parse(src)
        .into_result()
}

fn describe(errs: &[Rich<'_, char>]) -> String {
    match errs.first() {
        Some(e) => format!("{} at offset {}", error_message(e), e.span().start),
        None => "malformed date-time".to_string(),
    }
}

/// Render a grammar error as a one-line message.
///
/// Calendar, hour-24 and range rejections carry no offending token, so they
/// read as `expected <label>` instead of claiming the input ended early.
#[must_use]
pub fn error_message(e: &Rich<'_, char>) -> String {
    let labels: Option<Vec<&str>> = e
        .expected()
        .map(|pattern| match pattern {
            RichPattern::Label(label) => Some(label.as_ref()),
            _ => None,
        })
        .collect();

    match (e.found(), labels) {
        (None, Some(labels)) if !labels.is_empty() => {
            format!("expected {}", labels.join(" or "))
        }
        _ => e.to_string(),
    }
}

fn date_time<'src, I, E>() -> impl Parser<'src, I, DateTimeString, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, GrammarExpected>,
{
    full_date()
        .then_ignore(just('T'))
        .then(partial_time())
        .then_ignore(just('Z'))
        .then_ignore(end())
        .try_map(|(date, time), span| match resolve(date, time) {
            Some(instant) => Ok(DateTimeString {
                date,
                time,
                instant,
            }),
            None => Err(E::Error::expected_found(
                [GrammarExpected::Instant],
                None,
                span,
            )),
        })
}

fn resolve(date: CalendarDate, time: ClockTime) -> Option<Instant> {
    let day = civil::Date::new(date.year, date.month, date.day).ok()?;
    let (day, clock) = if time.hour == 24 {
        (day.tomorrow().ok()?, civil::Time::midnight())
    } else {
        let clock = civil::Time::new(
            i8::try_from(time.hour).ok()?,
            i8::try_from(time.minute.unwrap_or(0)).ok()?,
            i8::try_from(time.second.unwrap_or(0)).ok()?,
            i32::from(time.millisecond.unwrap_or(0)) * 1_000_000,
        )
        .ok()?;
        (day, clock)
    };

    Instant::from_civil(day.to_datetime(clock)).ok()
}

fn full_date<'src, I, E>() -> impl Parser<'src, I, CalendarDate, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, GrammarExpected>,
{
    let year = i16_0_9()
        .then(i16_0_9())
        .then(i16_0_9())
        .then(i16_0_9())
        .map(|(((a, b), c), d)| 1000 * a + 100 * b + 10 * c + d);

    let month = choice((
        just('0').ignore_then(i8_1_9()),
        just('1').ignore_then(i8_0_2()).map(|b| 10 + b),
    ));

    let day = choice((
        just('0').ignore_then(i8_1_9()),
        i8_1_2().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('3').ignore_then(i8_0_1()).map(|b| 30 + b),
    ));

    year.then_ignore(just('-'))
        .then(month)
        .then_ignore(just('-'))
        .then(day)
        .try_map(|((year, month), day), span| {
            if civil::Date::new(year, month, day).is_err() {
                Err(E::Error::expected_found([GrammarExpected::Date], None, span))
            } else {
                Ok(CalendarDate { year, month, day })
            }
        })
}

fn partial_time<'src, I, E>() -> impl Parser<'src, I, ClockTime, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, GrammarExpected>,
{
    let millisecond = just('.').ignore_then(time_milli());
    let second = just(':')
        .ignore_then(time_two_digits())
        .then(millisecond.or_not());
    let minute = just(':')
        .ignore_then(time_two_digits())
        .then(second.or_not());

    time_hour()
        .then(minute.or_not())
        .try_map(|(hour, rest), span| {
            let (minute, second, millisecond) = match rest {
                None => (None, None, None),
                Some((minute, None)) => (Some(minute), None, None),
                Some((minute, Some((second, millisecond)))) => {
                    (Some(minute), Some(second), millisecond)
                }
            };

            let time = ClockTime {
                hour,
                minute,
                second,
                millisecond,
            };
            if hour == 24 && !time.is_on_the_hour() {
                Err(E::Error::expected_found(
                    [GrammarExpected::Hour24],
                    None,
                    span,
                ))
            } else {
                Ok(time)
            }
        })
}

fn time_hour<'src, I, E>() -> impl Parser<'src, I, u8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    choice((
        u8_0_1().then(u8_0_9()).map(|(a, b)| 10 * a + b),
        just('2').ignore_then(u8_0_4()).map(|b| 20 + b),
    ))
}

/// Minutes and seconds share the 00-59 range; leap seconds are not accepted.
fn time_two_digits<'src, I, E>() -> impl Parser<'src, I, u8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    u8_0_5().then(u8_0_9()).map(|(a, b)| 10 * a + b)
}

fn time_milli<'src, I, E>() -> impl Parser<'src, I, u16, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    u16_0_9()
        .then(u16_0_9())
        .then(u16_0_9())
        .map(|((a, b), c)| 100 * a + 10 * b + c)
}

macro_rules! define_digit_select {
    ($fname:ident : $ty:ty => { $($ch:literal),+ $(,)? }) => {
        #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::char_lit_as_u8, clippy::cast_possible_wrap)]
        const fn $fname<'src, I, E>() -> impl Parser<'src, I, $ty, E> + Copy
        where
            I: Input<'src, Token = char, Span = SimpleSpan>,
            E: ParserExtra<'src, I>,
        {
            select! {
                $(
                    $ch => (($ch as u8 - b'0') as $ty),
                )+
            }
        }
    };
}

define_digit_select!(u8_0_1 : u8 => { '0', '1' });
define_digit_select!(u8_0_4 : u8 => { '0', '1', '2', '3', '4' });
define_digit_select!(u8_0_5 : u8 => { '0', '1', '2', '3', '4', '5' });
define_digit_select!(u8_0_9 : u8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(u16_0_9 : u16 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i8_0_1 : i8 => { '0', '1' });
define_digit_select!(i8_0_2 : i8 => { '0', '1', '2' });
define_digit_select!(i8_0_9 : i8 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i8_1_2 : i8 => { '1', '2' });
define_digit_select!(i8_1_9 : i8 => { '1', '2', '3', '4', '5', '6', '7', '8', '9' });
define_digit_select!(i16_0_9 : i16 => { '0', '1', '2', '3', '4', '5', '6', '7', '8', '9' });
