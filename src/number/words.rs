//! Words-to-number parsing.
//!
//! Turns a phrase such as "five thousand three hundred" into `5300.0`. Number
//! words are first rewritten to digits by the [`NumberWordDictionary`], the
//! result is split into numeric tokens, and the tokens are folded with a
//! small stack that multiplies on increasing magnitude and adds on
//! decreasing magnitude.
//!
//! Parsing never fails. Tokens that are not numbers count as `0`, so garbage
//! input quietly produces `0.0` or some other odd value.
//!
//! # Examples
//!
//! ```
//! use bandolier::number::words_to_number;
//!
//! assert_eq!(words_to_number("one hundred thousand"), 100000.0);
//! assert_eq!(words_to_number("seventy-one"), 71.0);
//! assert_eq!(words_to_number("42"), 42.0);
//! ```

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use super::dictionary::NumberWordDictionary;

lazy_static! {
    // ASCII whitespace only; a no-break space stays inside the token.
    static ref TOKEN_SEPARATOR: Regex =
        Regex::new(r"(?-u:[\s-])+").expect("token separator pattern should be valid");
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^(?-u:\s)*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("numeric prefix pattern should be valid");
}

/// Tokens at or above this value close a phrase when a smaller token follows.
const PHRASE_BOUNDARY: f64 = 1000.0;

/// Work stack of partial accumulations for a single parse.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParseStack {
    items: Vec<f64>,
}

impl ParseStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<f64> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<f64> {
        self.items.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Parse a natural-language number phrase.
///
/// The conjunction "and" is ignored, and words may be separated by spaces or
/// hyphens. Digits may be mixed in ("5 thousand").
pub fn words_to_number(phrase: &str) -> f64 {
    let substituted = NumberWordDictionary::global().substitute(phrase);
    let tokens: Vec<f64> = TOKEN_SEPARATOR
        .split(&substituted)
        .map(leading_float)
        .collect();

    trace!("words_to_number: {phrase:?} -> {tokens:?}");

    let value = fold_tokens(&tokens);
    debug!("words_to_number: {phrase:?} = {value}");
    value
}

/// Combine numeric tokens into a single value.
fn fold_tokens(tokens: &[f64]) -> f64 {
    let mut stack = ParseStack::new();
    let mut sum = 0.0;
    let mut last: Option<f64> = None;

    for &token in tokens {
        match stack.top() {
            None => stack.push(token),
            Some(top) if top > token => {
                if last.is_some_and(|l| l >= PHRASE_BOUNDARY) {
                    // Dropping down from a thousand or more starts a new phrase.
                    sum += stack.pop().unwrap_or(0.0);
                    stack.push(token);
                } else {
                    // "seventy one" -> 70 + 1
                    let top = stack.pop().unwrap_or(0.0);
                    stack.push(top + token);
                }
            }
            Some(_) => {
                // "three hundred" -> 3 * 100
                let top = stack.pop().unwrap_or(0.0);
                stack.push(top * token);
            }
        }
        last = Some(token);
    }

    sum + stack.pop().unwrap_or(0.0)
}

/// Value of the leading numeric prefix of `text`, or `0.0` when there is none.
///
/// Accepts leading whitespace, an optional sign, digits with an optional
/// fractional part, and an optional exponent: `"12abc"` is `12.0`,
/// `" -1.5e2x"` is `-150.0`, `"abc"` is `0.0`.
pub fn leading_float(text: &str) -> f64 {
    NUMERIC_PREFIX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_magnitudes() {
        assert_eq!(words_to_number("one hundred thousand"), 100000.0);
        assert_eq!(words_to_number("seventy one"), 71.0);
        assert_eq!(words_to_number("five thousand three hundred"), 5300.0);
        assert_eq!(words_to_number("three hundred"), 300.0);
    }

    #[test]
    fn test_hyphen_and_conjunction() {
        assert_eq!(words_to_number("seventy-one"), 71.0);
        assert_eq!(words_to_number("one hundred and five"), 105.0);
        assert_eq!(words_to_number("two million"), 2_000_000.0);
    }

    #[test]
    fn test_numeric_input_is_idempotent() {
        assert_eq!(words_to_number("42"), 42.0);
        assert_eq!(words_to_number("1.5"), 1.5);
        assert_eq!(words_to_number("5 thousand"), 5000.0);
    }

    #[test]
    fn test_degenerate_input_resolves_to_zero() {
        assert_eq!(words_to_number(""), 0.0);
        assert_eq!(words_to_number("banana"), 0.0);
        // leading separator yields an empty first token that multiplies through
        assert_eq!(words_to_number(" one"), 0.0);
    }

    #[test]
    fn test_only_ascii_whitespace_separates_tokens() {
        assert_eq!(words_to_number("one\u{a0}hundred"), 1.0);
        assert_eq!(words_to_number("one\thundred"), 100.0);
    }

    #[test]
    fn test_parse_stack() {
        let mut stack = ParseStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);

        stack.push(3.0);
        stack.push(7.0);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(7.0));
        assert_eq!(stack.pop(), Some(7.0));
        assert_eq!(stack.pop(), Some(3.0));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("12abc"), 12.0);
        assert_eq!(leading_float(" -1.5e2x"), -150.0);
        assert_eq!(leading_float(".5"), 0.5);
        assert_eq!(leading_float("7."), 7.0);
        assert_eq!(leading_float("1e"), 1.0);
        assert_eq!(leading_float("abc"), 0.0);
        assert_eq!(leading_float(""), 0.0);
        assert_eq!(leading_float("-"), 0.0);
        assert_eq!(leading_float("1\u{a0}100"), 1.0);
    }
}
