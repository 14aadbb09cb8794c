//! Scalar cleaning filters
//!
//! Each filter removes characters rather than rejecting input; the result
//! is always a string, possibly empty.

use std::sync::LazyLock;

use regex::Regex;

use super::types::ScalarFilter;

/// A markup tag, or an unterminated `<` through the end of the input
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is a valid regex"));

const EMAIL_PUNCTUATION: &str = "!#$%&'*+-=?^_`{|}~@.[]";
const URL_PUNCTUATION: &str = "$-_.+!*'(),{}|\\^~[]`<>#%\";/?:@&=";

impl ScalarFilter {
    pub fn apply(self, value: &str) -> String {
        match self {
            ScalarFilter::Text => strip_tags(value),
            ScalarFilter::Email => keep_ascii(value, EMAIL_PUNCTUATION),
            ScalarFilter::Url => keep_ascii(value, URL_PUNCTUATION),
            ScalarFilter::Integer => keep_number(value, false),
            ScalarFilter::Float => keep_number(value, true),
        }
    }
}

/// Remove markup and stray angle brackets, encode quotes
pub fn strip_tags(value: &str) -> String {
    let stripped = TAG_PATTERN.replace_all(value, "");
    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        match c {
            '<' | '>' => {}
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            c => out.push(c),
        }
    }
    out
}

/// Keep ASCII letters, digits and the given punctuation
fn keep_ascii(value: &str, punctuation: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || punctuation.contains(*c))
        .collect()
}

/// Keep digits and signs, plus the first decimal point when `fraction` is set
fn keep_number(value: &str, fraction: bool) -> String {
    let mut seen_point = false;
    value
        .chars()
        .filter(|c| match c {
            '0'..='9' | '+' | '-' => true,
            '.' if fraction && !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}
