// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use clap::{ArgMatches, Command, arg};
use isoscalar_datetime::grammar::{error_message, parse_date_time};
use isoscalar_datetime::{Instant, Value, parse_value};

#[derive(Debug, Clone)]
pub struct CmdParse {
    pub text: String,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    #[must_use]
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Parse date-time text, printing its canonical form and Unix milliseconds")
            .arg(
                arg!(text: <TEXT> "Date-time text such as 2016-02-01T00:00Z")
                    .allow_hyphen_values(true),
            )
    }

    #[must_use]
    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("text") {
            Some(text) => Self { text: text.clone() },
            None => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing date-time...");
        match self.parse() {
            Ok(instant) => Self::write(instant, &mut io::stdout()),
            Err(err) => {
                if let Err(e) = self.report(io::stderr()) {
                    tracing::warn!(%e, "failed to render report");
                }
                Err(err)
            }
        }
    }

    /// Parse the text as a request variable.
    pub fn parse(&self) -> Result<Instant, Box<dyn Error>> {
        Ok(parse_value(&Value::from(self.text.as_str()))?)
    }

    /// Write the canonical text and Unix milliseconds of an instant.
    pub fn write(instant: Instant, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        writeln!(out, "{}", instant.to_canonical()?)?;
        writeln!(out, "{}", instant.as_millis())?;
        Ok(())
    }

    /// Render the grammar failures of the text, if any.
    pub fn report(&self, mut out: impl io::Write) -> io::Result<()> {
        let Err(errs) = parse_date_time(&self.text) else {
            return Ok(());
        };

        for e in errs {
            let message = error_message(&e);
            Report::build(ReportKind::Error, e.span().into_range())
                .with_config(Config::new().with_index_type(IndexType::Byte))
                .with_message(&message)
                .with_label(
                    Label::new(e.span().into_range())
                        .with_message(message)
                        .with_color(Color::Red),
                )
                .finish()
                .write(Source::from(self.text.as_str()), &mut out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(text: &str) -> CmdParse {
        CmdParse {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_parse_parse() {
        let cmd = Command::new("test").subcommand(CmdParse::command());
        let matches = cmd
            .try_get_matches_from(["test", "parse", "2016-02-01T13Z"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdParse::NAME).unwrap();
        assert_eq!(CmdParse::from(sub_matches).text, "2016-02-01T13Z");
    }

    #[test]
    fn test_writes_canonical_and_millis() {
        #[rustfmt::skip]
        let cases = [
            ("2016-02-01T24Z",           "2016-02-02T00:00:00.000Z\n1454371200000\n"),
            ("2016-02-01T00:00:00.456Z", "2016-02-01T00:00:00.456Z\n1454284800456\n"),
            ("1969-12-31T23:59:59.999Z", "1969-12-31T23:59:59.999Z\n-1\n"),
        ];
        for (text, expected) in cases {
            let instant = cmd(text).parse().unwrap();
            let mut buf = Vec::new();
            CmdParse::write(instant, &mut buf).unwrap();
            assert_eq!(String::from_utf8(buf).unwrap(), expected, "Failed for {text}");
        }
    }

    #[test]
    fn test_reports_grammar_failures() {
        for text in ["2016-02-01T00:00:00.1Z", "2015-02-29T00Z", "2016-02-01T24:01Z"] {
            let cmd = cmd(text);
            assert!(cmd.parse().is_err(), "Failed for {text}");

            let mut buf = Vec::new();
            cmd.report(&mut buf).unwrap();
            assert!(!buf.is_empty(), "Failed for {text}");
        }
    }

    #[test]
    fn test_reports_rejected_calendar_date() {
        let mut buf = Vec::new();
        cmd("2015-02-29T00Z").report(&mut buf).unwrap();
        let output = String::from_utf8_lossy(&buf);
        assert!(output.contains("expected valid calendar date"), "{output}");
        assert!(!output.contains("end of input"), "{output}");
    }

    #[test]
    fn test_writes_last_canonical_instant() {
        let instant = cmd("9999-12-31T23:59:59.999Z").parse().unwrap();
        let mut buf = Vec::new();
        CmdParse::write(instant, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "9999-12-31T23:59:59.999Z\n253402300799999\n"
        );
    }

    #[test]
    fn test_no_report_for_valid_text() {
        let mut buf = Vec::new();
        cmd("2016-02-01T00Z").report(&mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
