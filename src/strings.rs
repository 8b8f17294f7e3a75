//! String helpers.

use crate::error::{BandolierError, Result};

/// Replacements applied after the backslash unescape, in order.
const SLASH_REPLACEMENTS: &[(&str, &str)] = &[
    ("\\\\", "\\"),
    ("\\\"", "\""),
    ("\\'", "'"),
    ("\\\\'", "'"),
    ("\\\\\"", "\""),
];

/// Remove escaping backslashes, up to three levels deep.
///
/// A single unescape pass turns `\x` into `x`, `\\` into `\` and `\0` into a
/// NUL character; a fixed set of replacements then cleans up the escaped
/// quotes and doubled backslashes left over from deeper escaping.
///
/// ```
/// use bandolier::strings::strip_slashes;
///
/// assert_eq!(strip_slashes(r#"it\'s a \"quote\""#), r#"it's a "quote""#);
/// assert_eq!(strip_slashes(r"\\\'"), "'");
/// ```
pub fn strip_slashes(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            output.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => output.push('\0'),
            Some(next) => output.push(next),
            None => {}
        }
    }

    SLASH_REPLACEMENTS
        .iter()
        .fold(output, |acc, (from, to)| acc.replace(from, to))
}

/// Whether `haystack` starts with `needle`. An empty needle always matches.
pub fn starts_with(haystack: &str, needle: &str) -> bool {
    haystack.starts_with(needle)
}

/// Whether `haystack` ends with `needle`.
///
/// Unlike [`starts_with`], an empty needle is rejected.
pub fn ends_with(haystack: &str, needle: &str) -> Result<bool> {
    if needle.is_empty() {
        return Err(BandolierError::invalid_argument(
            "Needle must be one or more characters",
        ));
    }
    Ok(haystack.ends_with(needle))
}

/// Whether `haystack` contains `needle`. An empty needle never matches.
pub fn contains(haystack: &str, needle: &str, case_sensitive: bool) -> bool {
    if needle.is_empty() {
        return false;
    }
    if case_sensitive {
        haystack.contains(needle)
    } else {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Whether `haystack` contains at least one of `needles`.
pub fn contains_any<S: AsRef<str>>(haystack: &str, needles: &[S], case_sensitive: bool) -> bool {
    needles
        .iter()
        .any(|needle| contains(haystack, needle.as_ref(), case_sensitive))
}

/// Drop the outer characters when the value is quoted with `"` or `'`.
///
/// The opening and closing quote do not have to be the same character.
pub fn strip_outer_quotes(value: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';

    if value.len() > 1 && value.starts_with(is_quote) && value.ends_with(is_quote) {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_slashes() {
        assert_eq!(strip_slashes("no slashes"), "no slashes");
        assert_eq!(
            strip_slashes(r"A string with a bunch of \\\ slashes"),
            r"A string with a bunch of \ slashes"
        );
        assert_eq!(strip_slashes(r#"say \"hi\""#), r#"say "hi""#);
        assert_eq!(strip_slashes(r"\\\\\'"), "'");
        assert_eq!(strip_slashes(r"nul\0"), "nul\0");
        assert_eq!(strip_slashes("trailing\\"), "trailing");
    }

    #[test]
    fn test_starts_with() {
        assert!(starts_with("bandolier", "band"));
        assert!(!starts_with("bandolier", "lier"));
        assert!(starts_with("bandolier", ""));
    }

    #[test]
    fn test_ends_with() {
        assert!(ends_with("bandolier", "lier").unwrap());
        assert!(!ends_with("bandolier", "band").unwrap());
        assert!(ends_with("bandolier", "").is_err());
    }

    #[test]
    fn test_contains() {
        assert!(contains("Hello World", "World", true));
        assert!(!contains("Hello World", "world", true));
        assert!(contains("Hello World", "world", false));
        assert!(!contains("Hello World", "", true));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("Hello World", &["foo", "World"], true));
        assert!(!contains_any("Hello World", &["foo", "bar"], true));
        assert!(contains_any("Hello World", &["HELLO"], false));
        assert!(!contains_any::<&str>("Hello World", &[], true));
    }

    #[test]
    fn test_strip_outer_quotes() {
        assert_eq!(strip_outer_quotes("\"quoted\""), "quoted");
        assert_eq!(strip_outer_quotes("'quoted'"), "quoted");
        assert_eq!(strip_outer_quotes("\"mixed'"), "mixed");
        assert_eq!(strip_outer_quotes("\""), "\"");
        assert_eq!(strip_outer_quotes("\"open"), "\"open");
        assert_eq!(strip_outer_quotes("plain"), "plain");
    }
}
