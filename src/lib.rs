//! # Bandolier
//!
//! Small, stateless helpers for web applications.
//!
//! ## Features
//!
//! - Environment lookup with `true`/`false`/`null`/`empty` coercion
//! - Number phrases to floats ("one hundred thousand" -> 100000.0)
//! - Lenient float extraction from formatted strings
//! - String and parameter-bag helpers
//! - Site URL building for container and host setups

pub mod attributes;
pub mod cli;
pub mod env;
pub mod error;
pub mod number;
pub mod paths;
pub mod strings;

pub mod prelude {
    pub use crate::env::{EnvResolver, EnvSource, EnvValue, MapEnv, ProcessEnv, env};
    pub use crate::error::{BandolierError, Result};
    pub use crate::number::{to_float, words_to_number};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
