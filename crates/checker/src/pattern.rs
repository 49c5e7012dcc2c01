// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Anchored, whitespace-tolerant line patterns.

use regex::Regex;

/// An expected-line pattern compiled to match a whole line.
///
/// The fragment is wrapped as `^ *(?:fragment) *$`, so it has to cover the
/// entire line apart from leading and trailing spaces. The group keeps a
/// top-level alternation inside the anchors.
///
/// A `{` that does not open a counted repetition (`{n}`, `{n,}`, `{,m}`,
/// `{n,m}`) is a literal brace, as in PCRE-style engines, so expectations
/// copied from source code such as `struct S {` work unescaped.
#[derive(Clone, Debug)]
pub struct LinePattern {
    source: String,
    regex: Regex,
}

impl LinePattern {
    /// Compile `pattern`, returning the regex error if it is not valid
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let fragment = escape_literal_braces(pattern);
        let regex = Regex::new(&format!("^ *(?:{fragment}) *$"))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Whether the whole line, modulo surrounding spaces, matches
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The pattern as written in the expectation file
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Escape braces that the `regex` crate would read as a broken repetition.
///
/// Escapes and character classes are copied through untouched. `{,m}` is
/// rewritten to `{0,m}`.
fn escape_literal_braces(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.char_indices().peekable();
    let mut in_class = false;

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                let Some((_, escaped)) = chars.next() else {
                    break;
                };
                out.push(escaped);
                // \p{..}, \x{..}, \u{..} carry their own braces
                let braced = matches!(escaped, 'p' | 'P' | 'x' | 'u' | 'U')
                    && chars.peek().is_some_and(|&(_, next)| next == '{');
                if braced {
                    for (_, inner) in chars.by_ref() {
                        out.push(inner);
                        if inner == '}' {
                            break;
                        }
                    }
                }
            }
            '[' if !in_class => {
                in_class = true;
                out.push(c);
                if let Some(&(_, '^')) = chars.peek() {
                    out.push('^');
                    chars.next();
                }
                // a leading ']' is a member, not the end of the class
                if let Some(&(_, ']')) = chars.peek() {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            '{' if !in_class => match counted_repetition(&pattern[i + 1..]) {
                Some((quantifier, consumed)) => {
                    out.push_str(&quantifier);
                    for _ in 0..consumed {
                        chars.next();
                    }
                }
                None => out.push_str(r"\{"),
            },
            '}' if !in_class => out.push_str(r"\}"),
            _ => out.push(c),
        }
    }

    out
}

/// Parse the text after a `{` as `n}`, `n,}`, `,m}` or `n,m}`.
///
/// Returns the normalized quantifier and how many chars it consumed.
fn counted_repetition(rest: &str) -> Option<(String, usize)> {
    let min_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let min = &rest[..min_len];
    let after_min = &rest[min_len..];

    let (max, consumed) = match after_min.strip_prefix(',') {
        Some(tail) => {
            let max_len = tail.bytes().take_while(u8::is_ascii_digit).count();
            (Some(&tail[..max_len]), min_len + 1 + max_len)
        }
        None => (None, min_len),
    };

    if !rest[consumed..].starts_with('}') {
        return None;
    }

    let quantifier = match max {
        None if min.is_empty() => return None,
        None => format!("{{{min}}}"),
        Some(max) => {
            let min = if min.is_empty() { "0" } else { min };
            format!("{{{min},{max}}}")
        }
    };
    Some((quantifier, consumed + 1))
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
