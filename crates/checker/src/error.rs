// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comparison failures.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of the comparison ran out first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthMismatch {
    /// The actual output has lines left after the last expectation
    ActualLonger,
    /// Expectations are left after the last line of actual output
    ExpectedLonger,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthMismatch::ActualLonger => write!(f, "more lines than expected were produced"),
            LengthMismatch::ExpectedLonger => {
                write!(f, "more lines were expected than were produced")
            }
        }
    }
}

/// Errors returned by a comparison
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("{0}")]
    LengthMismatch(LengthMismatch),

    #[error(
        "actual line did not match the expected regular expression.\n\
         {}:{line_number}: Actual: {actual:?}\n\
         Expected: {pattern:?}",
        .expected_path.display()
    )]
    ContentMismatch {
        expected_path: PathBuf,
        line_number: usize,
        actual: String,
        pattern: String,
    },

    #[error("{}:{line_number}: invalid regex pattern {pattern:?}: {source}", .expected_path.display())]
    InvalidPattern {
        expected_path: PathBuf,
        line_number: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CompareError {
    /// True when the inputs were read fine but the output does not conform.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            CompareError::LengthMismatch(_) | CompareError::ContentMismatch { .. }
        )
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
