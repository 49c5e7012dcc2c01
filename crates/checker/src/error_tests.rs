// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn length_mismatch_messages() {
    assert_eq!(
        CompareError::LengthMismatch(LengthMismatch::ActualLonger).to_string(),
        "more lines than expected were produced"
    );
    assert_eq!(
        CompareError::LengthMismatch(LengthMismatch::ExpectedLonger).to_string(),
        "more lines were expected than were produced"
    );
}

#[test]
fn content_mismatch_message() {
    let err = CompareError::ContentMismatch {
        expected_path: PathBuf::from("tests/main.rs"),
        line_number: 7,
        actual: "xabc".to_string(),
        pattern: "abc".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "actual line did not match the expected regular expression.\n\
         tests/main.rs:7: Actual: \"xabc\"\n\
         Expected: \"abc\""
    );
}

#[test]
fn invalid_pattern_message_names_location() {
    let source = regex::Regex::new("(").unwrap_err();
    let err = CompareError::InvalidPattern {
        expected_path: PathBuf::from("main.rs"),
        line_number: 3,
        pattern: "(".to_string(),
        source,
    };
    assert!(err.to_string().starts_with("main.rs:3: invalid regex pattern \"(\""));
}

#[test]
fn mismatch_classification() {
    assert!(CompareError::LengthMismatch(LengthMismatch::ActualLonger).is_mismatch());
    assert!(CompareError::ContentMismatch {
        expected_path: PathBuf::new(),
        line_number: 1,
        actual: String::new(),
        pattern: String::new(),
    }
    .is_mismatch());

    let io = CompareError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(!io.is_mismatch());
}
