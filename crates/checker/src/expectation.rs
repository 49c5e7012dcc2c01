// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extraction of expectation lines from annotated source.

use std::io::{self, BufRead, Lines};

/// A pattern taken from a prefixed line of the expectation file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expectation {
    /// Pattern text after the prefix, with surrounding whitespace trimmed
    pub pattern: String,
    /// 1-based physical line number in the expectation file
    pub line_number: usize,
}

/// Lazy iterator over the expectations found in a reader.
///
/// Lines that do not start with the prefix are skipped but still counted,
/// so `line_number` always refers to the physical line.
pub struct Expectations<'p, R> {
    lines: Lines<R>,
    prefix: &'p str,
    line_number: usize,
}

impl<'p, R: BufRead> Expectations<'p, R> {
    pub fn new(reader: R, prefix: &'p str) -> Self {
        Self {
            lines: reader.lines(),
            prefix,
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for Expectations<'_, R> {
    type Item = io::Result<Expectation>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            if let Some(rest) = line.strip_prefix(self.prefix) {
                return Some(Ok(Expectation {
                    pattern: rest.trim().to_string(),
                    line_number: self.line_number,
                }));
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "expectation_tests.rs"]
mod tests;
