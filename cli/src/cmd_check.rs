// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use isoscalar_datetime::{Value, parse_value};

#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub file: Option<PathBuf>,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    #[must_use]
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check date-time candidates, one per line")
            .arg(
                arg!([FILE] "File to read candidates from, defaults to stdin")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    #[must_use]
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            file: matches.get_one::<PathBuf>("FILE").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking candidates...");
        let mut stdout = io::stdout().lock();
        let summary = match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
                Self::check(BufReader::new(file), &mut stdout)?
            }
            None => Self::check(io::stdin().lock(), &mut stdout)?,
        };

        tracing::info!(total = summary.total, invalid = summary.invalid, "checked candidates");
        if summary.invalid > 0 {
            return Err(format!(
                "{}/{} candidates are invalid",
                summary.invalid, summary.total
            )
            .into());
        }
        Ok(())
    }

    /// Check each non-empty line of `reader`, writing one verdict per line.
    ///
    /// Lines are checked as-is, so surrounding whitespace makes a candidate
    /// invalid. A line that is not UTF-8 is invalid and shown lossily; only
    /// read failures abort the check.
    pub fn check(reader: impl BufRead, out: &mut impl io::Write) -> io::Result<CheckSummary> {
        let mut summary = CheckSummary::default();
        for line in reader.split(b'\n') {
            let mut bytes = line?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            if bytes.is_empty() {
                continue;
            }

            summary.total += 1;
            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    summary.invalid += 1;
                    let line = String::from_utf8_lossy(e.as_bytes());
                    writeln!(out, "{} {line}", "invalid".red())?;
                    continue;
                }
            };
            match parse_value(&Value::from(line.as_str())) {
                Ok(instant) => writeln!(out, "{} {line} {instant}", "ok".green())?,
                Err(_) => {
                    summary.invalid += 1;
                    writeln!(out, "{} {line}", "invalid".red())?;
                }
            }
        }
        Ok(summary)
    }
}

/// Counts of checked candidates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of non-empty lines checked
    pub total: usize,

    /// Number of lines rejected by the grammar
    pub invalid: usize,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_check() {
        let cmd = Command::new("test").subcommand(CmdCheck::command());
        let matches = cmd
            .try_get_matches_from(["test", "check", "/tmp/dates.txt"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdCheck::NAME).unwrap();
        let parsed = CmdCheck::from(sub_matches);
        assert_eq!(parsed.file, Some(PathBuf::from("/tmp/dates.txt")));
    }

    #[test]
    fn test_checks_lines() {
        let input = "\
2016-02-01T00Z
2016-02-01T25Z

2016-02-01T00:00:00.456Z
 2016-02-01T00Z
2015-02-29T00:00Z
";
        let mut buf = Vec::new();
        let summary = CmdCheck::check(input.as_bytes(), &mut buf).unwrap();
        assert_eq!(summary, CheckSummary { total: 5, invalid: 3 });

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("ok"));
        assert!(lines[0].ends_with("2016-02-01T00Z 2016-02-01T00:00:00.000Z"));
        assert!(lines[1].contains("invalid"));
        assert!(lines[2].contains("ok"));
        assert!(lines[3].contains("invalid"));
        assert!(lines[4].contains("invalid"));
    }

    #[test]
    fn test_checks_crlf_lines() {
        let mut buf = Vec::new();
        let summary =
            CmdCheck::check("2016-02-01T00Z\r\n2016-02-01T24Z\r\n".as_bytes(), &mut buf).unwrap();
        assert_eq!(summary, CheckSummary { total: 2, invalid: 0 });
    }

    #[test]
    fn test_checks_non_utf8_lines() {
        let input: &[u8] = b"2016-02-01T00Z\n\xff\xfe\n2016-02-01T24Z\n";
        let mut buf = Vec::new();
        let summary = CmdCheck::check(input, &mut buf).unwrap();
        assert_eq!(summary, CheckSummary { total: 3, invalid: 1 });

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("ok"));
        assert!(lines[1].contains("invalid"));
        assert!(lines[1].contains('\u{fffd}'));
        assert!(lines[2].contains("ok"));
    }

    #[test]
    fn test_run_fails_on_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2016-02-01T00Z").unwrap();
        writeln!(file, "2016-02-01T00:00:00.1Z").unwrap();

        let cmd = CmdCheck {
            file: Some(file.path().to_path_buf()),
        };
        let err = cmd.run().unwrap_err();
        assert_eq!(err.to_string(), "1/2 candidates are invalid");
    }

    #[test]
    fn test_run_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CmdCheck {
            file: Some(dir.path().join("missing.txt")),
        };
        assert!(cmd.run().unwrap_err().to_string().starts_with("Failed to open"));
    }
}
