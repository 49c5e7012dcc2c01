// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-by-line verification of program output against inline annotations.
//!
//! An expectation file is any text file where some lines start with a check
//! prefix (for example `// CHECK: `). The remainder of each such line is a
//! regular expression that must match the corresponding line of the actual
//! output. Lines without the prefix are ignored, so expectations can live
//! next to the source that produced the output.
//!
//! ```no_run
//! line_checker::compare("out.txt", "main.rs", "// CHECK: ")?;
//! # Ok::<(), line_checker::CompareError>(())
//! ```

pub mod cli;
mod compare;
mod error;
mod expectation;
mod pattern;

pub use compare::{compare, Checker};
pub use error::{CompareError, LengthMismatch};
pub use expectation::{Expectation, Expectations};
pub use pattern::LinePattern;
