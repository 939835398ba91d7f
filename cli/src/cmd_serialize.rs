// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, arg};
use isoscalar_datetime::{Value, serialize};

#[derive(Debug, Clone)]
pub struct CmdSerialize {
    pub value: String,
    pub json: bool,
}

impl CmdSerialize {
    pub const NAME: &str = "serialize";

    #[must_use]
    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Serialize a Unix timestamp or date-time text into canonical form")
            .arg(
                arg!(value: <VALUE> "Unix timestamp in seconds, or date-time text")
                    .allow_hyphen_values(true),
            )
            .arg(arg!(--json "Read VALUE as a JSON value instead of guessing its type"))
    }

    #[must_use]
    pub fn from(matches: &ArgMatches) -> Self {
        match matches.get_one::<String>("value") {
            Some(value) => Self {
                value: value.clone(),
                json: matches.get_flag("json"),
            },
            None => unreachable!(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "serializing value...");
        self.write(&mut io::stdout())
    }

    /// Serialize the value and write the canonical text.
    pub fn write(&self, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        let value = self.to_value()?;
        let text = serialize(&value)?;
        writeln!(out, "{text}")?;
        Ok(())
    }

    /// The input shape handed to the codec.
    ///
    /// Without `--json`, text that lexes fully as a number is a Unix timestamp.
    pub fn to_value(&self) -> Result<Value<'_>, Box<dyn Error>> {
        if self.json {
            let json: serde_json::Value = serde_json::from_str(&self.value)
                .map_err(|e| format!("Invalid JSON value '{}': {e}", self.value))?;
            return Ok(Value::from(json));
        }

        Ok(match lexical::parse::<f64, _>(&self.value) {
            Ok(seconds) => Value::Number(seconds),
            Err(_) => Value::from(self.value.as_str()),
        })
    }
}
