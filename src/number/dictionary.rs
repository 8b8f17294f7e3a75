//! Number-word dictionary.
//!
//! Maps English number words to their numeric value and rewrites a phrase so
//! that every number word is replaced by its value, ready for tokenization.
//!
//! # Examples
//!
//! ```
//! use bandolier::number::NumberWordDictionary;
//!
//! let dictionary = NumberWordDictionary::global();
//! assert_eq!(dictionary.lookup("thousand"), Some(1000.0));
//! assert_eq!(dictionary.substitute("seventy-one"), "70-1");
//! ```

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};
use lazy_static::lazy_static;

use crate::error::{BandolierError, Result};

/// Word to value table. Scale words come last.
const NUMBER_WORDS: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
    ("hundred", 1e2),
    ("thousand", 1e3),
    ("million", 1e6),
    ("billion", 1e9),
    ("trillion", 1e12),
    ("quadrillion", 1e15),
    ("quintillion", 1e18),
];

/// Magnitude words, i.e. multipliers rather than digits.
const SCALE_WORDS: &[&str] = &[
    "hundred",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Conjunction dropped from phrases ("one hundred and five").
const CONJUNCTION: &str = "and";

lazy_static! {
    static ref GLOBAL_DICTIONARY: NumberWordDictionary =
        NumberWordDictionary::new().expect("number word patterns should be valid");
}

/// Immutable lookup table from number words to values.
pub struct NumberWordDictionary {
    values: HashMap<&'static str, f64>,
    matcher: AhoCorasick,
    replacements: Vec<String>,
}

impl NumberWordDictionary {
    /// Build a dictionary over the built-in word table.
    ///
    /// Most callers want the shared [`global`](Self::global) instance.
    pub fn new() -> Result<Self> {
        let values: HashMap<&'static str, f64> = NUMBER_WORDS.iter().copied().collect();

        let mut keys = Vec::with_capacity(NUMBER_WORDS.len() + 1);
        let mut replacements = Vec::with_capacity(NUMBER_WORDS.len() + 1);
        for (word, value) in NUMBER_WORDS {
            keys.push(*word);
            replacements.push(format_value(*value));
        }
        keys.push(CONJUNCTION);
        replacements.push(String::new());

        // Leftmost-longest so "seventy" beats "seven" and "thousand" beats "and".
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| BandolierError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self {
            values,
            matcher,
            replacements,
        })
    }

    /// The process-wide dictionary, built on first use.
    pub fn global() -> &'static NumberWordDictionary {
        &GLOBAL_DICTIONARY
    }

    /// Value of a single number word.
    pub fn lookup(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    /// Whether `word` is a magnitude word such as "hundred" or "million".
    pub fn is_scale_word(&self, word: &str) -> bool {
        SCALE_WORDS.contains(&word)
    }

    /// All known words in table order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> {
        NUMBER_WORDS.iter().map(|(word, _)| *word)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every number word in `phrase` with its value and drop the
    /// conjunction "and".
    ///
    /// Matching runs over the raw text, not over whole words, and is
    /// case-sensitive.
    pub fn substitute(&self, phrase: &str) -> String {
        let mut output = String::with_capacity(phrase.len());
        let mut last_match_end = 0;

        for m in self.matcher.find_iter(phrase) {
            output.push_str(&phrase[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&phrase[last_match_end..]);
        output
    }
}

fn format_value(value: f64) -> String {
    // Every table entry is integral and well inside i64 range.
    format!("{}", value as i64)
}
