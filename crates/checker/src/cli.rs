// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments for the `line-checker` binary.

use clap::Parser;
use std::path::PathBuf;

/// Prefix used when none is given on the command line
pub const DEFAULT_CHECK_PREFIX: &str = "// CHECK: ";

/// Exit codes of the binary
pub mod exit_codes {
    /// Every line matched
    pub const SUCCESS: i32 = 0;
    /// The output did not conform to the expectations
    pub const MISMATCH: i32 = 1;
    /// The comparison could not run (unreadable file, invalid pattern)
    pub const ERROR: i32 = 2;
}

/// Check program output line by line against annotated expectations
#[derive(Parser, Debug)]
#[command(name = "line-checker", version)]
pub struct Cli {
    /// File holding the actual output
    #[arg(value_name = "ACTUAL")]
    pub actual: PathBuf,

    /// File holding the expectation lines
    #[arg(value_name = "EXPECTED")]
    pub expected: PathBuf,

    /// Marker that starts each expectation line
    #[arg(
        short = 'p',
        long,
        env = "LINE_CHECKER_CHECK_PREFIX",
        default_value = DEFAULT_CHECK_PREFIX
    )]
    pub check_prefix: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
