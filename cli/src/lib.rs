// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front-end over the `DateTime` codec.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

mod cli;
mod cmd_check;
mod cmd_describe;
mod cmd_parse;
mod cmd_serialize;
mod config;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_check::{CheckSummary, CmdCheck};
pub use crate::cmd_describe::CmdDescribe;
pub use crate::cmd_parse::CmdParse;
pub use crate::cmd_serialize::CmdSerialize;
pub use crate::config::parse_config;
