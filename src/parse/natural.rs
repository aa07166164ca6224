//! Natural ("human") ordering of titles
//!
//! A title is cut into alternating runs of decimal digits (any script) and
//! everything else. Digit runs compare by numeric value, other runs compare
//! lowercased, so "Lecture 2" and "第２回" sort before "Lecture 10" and
//! "第１０回".

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+|\D+").expect("valid token pattern"));

static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d$").expect("valid digit pattern"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    c.is_ascii_digit() || DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// Numeric value of a decimal digit from any script.
///
/// Decimal digits are encoded in contiguous runs starting at zero, so the
/// value is the distance to the start of the run, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }

    Some(offset % 10)
}

/// One run of a tokenized title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Digit run as ASCII digits, leading zeros removed ("0" for all zeros)
    Number(String),
    /// Lowercased non-digit run
    Text(String),
}

impl Token {
    /// Token for a `\d+` run; text if some character has no digit value
    fn number(run: &str) -> Self {
        let digits: Option<String> = run
            .chars()
            .map(|c| digit_value(c).and_then(|d| char::from_digit(d, 10)))
            .collect();

        let Some(digits) = digits else {
            return Token::Text(run.to_lowercase());
        };

        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Token::Number("0".to_string())
        } else {
            Token::Number(trimmed.to_string())
        }
    }

    /// String form used when comparing tokens of different kinds
    fn as_str(&self) -> &str {
        match self {
            Token::Number(s) | Token::Text(s) => s,
        }
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Leading zeros are gone, so a longer run is a bigger number.
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            _ => self.as_str().cmp(other.as_str()),
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Comparable key for a title; element-wise, shorter prefix first
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(Vec<Token>);

impl NaturalKey {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

/// Derive the natural sort key of a title
pub fn natural_key(title: &str) -> NaturalKey {
    let tokens = TOKEN_RE
        .find_iter(title)
        .map(|m| {
            let run = m.as_str();
            if run.chars().next().is_some_and(is_decimal_digit) {
                Token::number(run)
            } else {
                Token::Text(run.to_lowercase())
            }
        })
        .collect();

    NaturalKey(tokens)
}
