//! Environment variable lookup with literal coercion.
//!
//! Values read from the environment are always strings, but configuration
//! often wants booleans and nulls. [`EnvResolver::get`] strips one layer of
//! `"..."` or `(...)` wrapping and then maps the literal tokens `true`,
//! `false`, `null` and `empty` (in any letter case) to typed values:
//!
//! | raw value             | result                    |
//! |-----------------------|---------------------------|
//! | `true`, `"TRUE"`      | `EnvValue::Bool(true)`    |
//! | `(false)`             | `EnvValue::Bool(false)`   |
//! | `null`, `"null"`      | `EnvValue::Null`          |
//! | `empty`, `(empty)`    | `EnvValue::String("")`    |
//! | `"a sentence"`        | `EnvValue::String("a sentence")` |
//!
//! Unset variables yield the caller's default without any coercion.
//!
//! The environment itself sits behind the [`EnvSource`] trait so lookups can
//! be served from the real process ([`ProcessEnv`]) or from a fixed map
//! ([`MapEnv`]) in tests.
//!
//! # Examples
//!
//! ```
//! use bandolier::env::{EnvResolver, EnvValue, MapEnv};
//!
//! let resolver = EnvResolver::new(MapEnv::from([("APP_DEBUG", "(true)")]));
//! assert_eq!(resolver.get("APP_DEBUG", EnvValue::Null), EnvValue::Bool(true));
//! assert_eq!(resolver.get("APP_NAME", "web"), EnvValue::from("web"));
//! ```

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};
use serde::Serialize;

/// A coerced environment value, or a caller-supplied default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl EnvValue {
    pub fn is_null(&self) -> bool {
        matches!(self, EnvValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EnvValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            EnvValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of the value. Strings are parsed after trimming.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            EnvValue::Int(i) => Some(*i),
            EnvValue::Float(f) => Some(*f as i64),
            EnvValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// True for `Null` and for the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            EnvValue::Null => true,
            EnvValue::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Null => write!(f, "null"),
            EnvValue::Bool(b) => write!(f, "{b}"),
            EnvValue::Int(i) => write!(f, "{i}"),
            EnvValue::Float(x) => write!(f, "{x}"),
            EnvValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        EnvValue::Bool(value)
    }
}

impl From<i64> for EnvValue {
    fn from(value: i64) -> Self {
        EnvValue::Int(value)
    }
}

impl From<f64> for EnvValue {
    fn from(value: f64) -> Self {
        EnvValue::Float(value)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::String(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        EnvValue::String(value)
    }
}

impl<T: Into<EnvValue>> From<Option<T>> for EnvValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(EnvValue::Null, Into::into)
    }
}

/// Read-only source of raw environment strings.
pub trait EnvSource: Send + Sync {
    /// Raw value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// A fixed in-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for MapEnv {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .fold(MapEnv::new(), |env, (k, v)| env.with_var(k, v))
    }
}

impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Resolves environment variables through an [`EnvSource`].
#[derive(Debug, Clone, Default)]
pub struct EnvResolver<S: EnvSource> {
    source: S,
}

impl EnvResolver<ProcessEnv> {
    /// Resolver over the real process environment.
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> EnvResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Look up `name` and coerce it, or return `default` untouched when unset.
    pub fn get(&self, name: &str, default: impl Into<EnvValue>) -> EnvValue {
        match self.source.var(name) {
            Some(raw) => {
                let value = coerce(&raw);
                trace!("env {name}: {raw:?} -> {value:?}");
                value
            }
            None => {
                debug!("env {name} is not set, using default");
                default.into()
            }
        }
    }

    /// Like [`get`](Self::get) with a `Null` default.
    pub fn get_or_null(&self, name: &str) -> EnvValue {
        self.get(name, EnvValue::Null)
    }
}

/// Look up `name` in the process environment.
pub fn env(name: &str, default: impl Into<EnvValue>) -> EnvValue {
    EnvResolver::process().get(name, default)
}

/// Strip one matching pair of surrounding double quotes or parentheses.
pub fn strip_wrapping(raw: &str) -> &str {
    if raw.len() > 1 {
        for (open, close) in [('"', '"'), ('(', ')')] {
            if let Some(inner) = raw.strip_prefix(open).and_then(|s| s.strip_suffix(close)) {
                return inner;
            }
        }
    }
    raw
}

/// Coerce a raw environment string to a typed value.
pub fn coerce(raw: &str) -> EnvValue {
    let value = strip_wrapping(raw);

    if value.eq_ignore_ascii_case("true") {
        EnvValue::Bool(true)
    } else if value.eq_ignore_ascii_case("false") {
        EnvValue::Bool(false)
    } else if value.eq_ignore_ascii_case("null") {
        EnvValue::Null
    } else if value.eq_ignore_ascii_case("empty") {
        EnvValue::String(String::new())
    } else {
        EnvValue::String(value.to_string())
    }
}
