// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::Path, path::PathBuf, str::FromStr};

use isoscalar_datetime::DateTimeScalar;

const ISOSCALAR_CONFIG_ENV: &str = "ISOSCALAR_CONFIG";

/// Load the scalar metadata.
///
/// The path given on the command line wins over `ISOSCALAR_CONFIG`; with
/// neither, the built-in metadata is used.
#[tracing::instrument]
pub fn parse_config(path: Option<&Path>) -> Result<DateTimeScalar, Box<dyn Error>> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(ISOSCALAR_CONFIG_ENV) {
            Some(env_path) => PathBuf::from(env_path),
            None => return Ok(DateTimeScalar::default()),
        },
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.scalar)
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRaw {
    #[serde(default)]
    scalar: DateTimeScalar,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
