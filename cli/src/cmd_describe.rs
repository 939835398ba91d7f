// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;
use isoscalar_datetime::Scalar;

use crate::config::parse_config;

#[derive(Debug, Clone)]
pub struct CmdDescribe {
    pub config: Option<PathBuf>,
}

impl CmdDescribe {
    pub const NAME: &str = "describe";

    #[must_use]
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the scalar name and description")
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to a TOML configuration file overriding the scalar metadata. Defaults to $ISOSCALAR_CONFIG, \
or the built-in metadata if that is not set.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    #[must_use]
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one("config").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "describing scalar...");
        let scalar = parse_config(self.config.as_deref())?;
        Self::write(&scalar, &mut io::stdout())?;
        Ok(())
    }

    /// Write the scalar metadata.
    pub fn write(scalar: &impl Scalar, out: &mut impl io::Write) -> io::Result<()> {
        writeln!(out, "{}", scalar.name().bold())?;
        if let Some(description) = scalar.description() {
            writeln!(out, "{description}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use isoscalar_datetime::DateTimeScalar;

    use super::*;

    #[test]
    fn test_parse_describe() {
        let cmd = Command::new("test").subcommand(CmdDescribe::command());
        let matches = cmd
            .try_get_matches_from(["test", "describe", "--config", "/tmp/config.toml"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdDescribe::NAME).unwrap();
        let parsed = CmdDescribe::from(sub_matches);
        assert_eq!(parsed.config, Some(PathBuf::from("/tmp/config.toml")));
    }

    #[test]
    fn test_writes_metadata() {
        let mut buf = Vec::new();
        CmdDescribe::write(&DateTimeScalar::default(), &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("DateTime"));
        assert!(output.contains("RFC 3339"));

        let scalar = DateTimeScalar::new()
            .with_name("Timestamp")
            .with_description(None);
        let mut buf = Vec::new();
        CmdDescribe::write(&scalar, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Timestamp"));
        assert_eq!(output.lines().count(), 1);
    }
}
