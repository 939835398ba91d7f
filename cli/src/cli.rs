// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, process::ExitCode};

use clap::{ArgMatches, Command, builder::styling, crate_version};
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cmd_check::CmdCheck;
use crate::cmd_describe::CmdDescribe;
use crate::cmd_parse::CmdParse;
use crate::cmd_serialize::CmdSerialize;

/// Name of the binary.
pub const APP_NAME: &str = "isoscalar";

/// Run the isoscalar command-line interface.
pub fn run() -> ExitCode {
    init_tracing();
    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    #[must_use]
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Validate and convert strict ISO 8601 date-time values.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(CmdSerialize::command())
            .subcommand(CmdParse::command())
            .subcommand(CmdCheck::command())
            .subcommand(CmdDescribe::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::{Check, Describe, Parse, Serialize};
        let command = match matches.subcommand() {
            Some((CmdSerialize::NAME, matches)) => Serialize(CmdSerialize::from(matches)),
            Some((CmdParse::NAME, matches)) => Parse(CmdParse::from(matches)),
            Some((CmdCheck::NAME, matches)) => Check(CmdCheck::from(matches)),
            Some((CmdDescribe::NAME, matches)) => Describe(CmdDescribe::from(matches)),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };
        Ok(Cli { command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run()
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Serialize a value into canonical text
    Serialize(CmdSerialize),

    /// Parse date-time text into an instant
    Parse(CmdParse),

    /// Check candidates line by line
    Check(CmdCheck),

    /// Print the scalar metadata
    Describe(CmdDescribe),
}

impl Commands {
    /// Run the command
    #[rustfmt::skip]
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        use Commands::{Check, Describe, Parse, Serialize};
        match self {
            Serialize(a) => a.run(),
            Parse(a)     => a.run(),
            Check(a)     => a.run(),
            Describe(a)  => a.run(),
        }
    }
}
