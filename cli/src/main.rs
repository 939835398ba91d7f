// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! isoscalar - validate and convert strict ISO 8601 date-time values

use std::process::ExitCode;

fn main() -> ExitCode {
    isoscalar_cli::run()
}
