// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lockstep comparison of actual output against expectations.

use crate::error::{CompareError, LengthMismatch};
use crate::expectation::{Expectation, Expectations};
use crate::pattern::LinePattern;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Compare the file at `actual` line by line against the patterns in
/// `expected` that start with `check_prefix`.
///
/// Fails on the first content mismatch, or as soon as one side runs out of
/// lines before the other.
pub fn compare(
    actual: impl AsRef<Path>,
    expected: impl AsRef<Path>,
    check_prefix: &str,
) -> Result<(), CompareError> {
    Checker::new(check_prefix).compare_files(actual, expected)
}

/// Comparator bound to a check prefix
#[derive(Clone, Debug)]
pub struct Checker {
    check_prefix: String,
}

impl Checker {
    pub fn new(check_prefix: impl Into<String>) -> Self {
        Self {
            check_prefix: check_prefix.into(),
        }
    }

    pub fn check_prefix(&self) -> &str {
        &self.check_prefix
    }

    /// Open both files and compare them.
    pub fn compare_files(
        &self,
        actual: impl AsRef<Path>,
        expected: impl AsRef<Path>,
    ) -> Result<(), CompareError> {
        let actual = actual.as_ref();
        let expected = expected.as_ref();
        log::debug!(
            "comparing {} against {} (prefix {:?})",
            actual.display(),
            expected.display(),
            self.check_prefix
        );

        let actual_reader = BufReader::new(File::open(actual)?);
        let expected_reader = BufReader::new(File::open(expected)?);
        self.compare_lines(actual_reader, expected_reader, expected)
    }

    /// Compare two readers. `expected_origin` names the expectation input in
    /// diagnostics.
    pub fn compare_lines<A: BufRead, E: BufRead>(
        &self,
        actual: A,
        expected: E,
        expected_origin: &Path,
    ) -> Result<(), CompareError> {
        let mut actual_lines = actual.lines();
        let mut expectations = Expectations::new(expected, &self.check_prefix);
        let mut matched = 0usize;

        loop {
            let actual_line = actual_lines.next().transpose()?;
            let expectation = expectations.next().transpose()?;

            let (line, expectation) = match (actual_line, expectation) {
                (None, None) => {
                    log::debug!("{matched} lines matched");
                    return Ok(());
                }
                (None, Some(_)) => {
                    return Err(CompareError::LengthMismatch(LengthMismatch::ExpectedLonger))
                }
                (Some(_), None) => {
                    return Err(CompareError::LengthMismatch(LengthMismatch::ActualLonger))
                }
                (Some(line), Some(expectation)) => (line, expectation),
            };

            check_line(&line, expectation, expected_origin)?;
            matched += 1;
        }
    }
}

fn check_line(
    line: &str,
    expectation: Expectation,
    expected_origin: &Path,
) -> Result<(), CompareError> {
    let Expectation {
        pattern,
        line_number,
    } = expectation;

    let compiled = match LinePattern::new(&pattern) {
        Ok(compiled) => compiled,
        Err(source) => {
            return Err(CompareError::InvalidPattern {
                expected_path: expected_origin.to_path_buf(),
                line_number,
                pattern,
                source,
            })
        }
    };

    log::trace!("{line_number}: {line:?} =~ {:?}", compiled.as_str());
    if compiled.is_match(line) {
        Ok(())
    } else {
        Err(CompareError::ContentMismatch {
            expected_path: expected_origin.to_path_buf(),
            line_number,
            actual: line.to_string(),
            pattern,
        })
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
