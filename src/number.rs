//! Number helpers: the number-word dictionary, the words-to-number parser and
//! lenient float extraction.

pub mod dictionary;
pub mod to_float;
pub mod words;

pub use dictionary::NumberWordDictionary;
pub use to_float::to_float;
pub use words::{ParseStack, leading_float, words_to_number};
