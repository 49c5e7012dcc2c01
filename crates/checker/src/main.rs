// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line checker CLI entry point.

use clap::Parser;
use env_logger::Env;

use line_checker::cli::{exit_codes, Cli};
use line_checker::Checker;

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or("LINE_CHECKER_LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let code = match Checker::new(cli.check_prefix).compare_files(&cli.actual, &cli.expected) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_mismatch() {
                exit_codes::MISMATCH
            } else {
                exit_codes::ERROR
            }
        }
    };

    std::process::exit(code);
}
