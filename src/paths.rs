//! Request URL helpers.
//!
//! Builds URLs for calling back into the current site. Values come from the
//! environment first and fall back to the web server's variables (held in
//! [`PathsConfig::server`]) and then to fixed defaults.
//!
//! Inside a container the site is reached through the `web` host, so
//! [`Paths::curl_path`] swaps `*.local` server names for `web` when the
//! container marker file is present.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::env::{EnvResolver, EnvSource, EnvValue};
use crate::error::{BandolierError, Result};
use crate::number::leading_float;

/// File whose presence means we are running inside a container.
pub const CURL_CHECK_FILE: &str = "/.dockerenv";

/// Host name used inside a container.
pub const CONTAINER_HOST: &str = "web";

/// Configuration for URL building.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Marker file checked by `curl_path`.
    pub curl_check_file: PathBuf,

    /// Web server variables such as `SERVER_NAME`, `HTTPS`, `SERVER_PORT`.
    pub server: HashMap<String, String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            curl_check_file: PathBuf::from(CURL_CHECK_FILE),
            server: HashMap::new(),
        }
    }
}

impl PathsConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            BandolierError::config(format!("{}: {e}", path.display()))
        })
    }

    pub fn with_server_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.server.insert(name.into(), value.into());
        self
    }

    pub fn with_curl_check_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.curl_check_file = path.into();
        self
    }

    fn server_var(&self, name: &str) -> Option<&str> {
        self.server.get(name).map(String::as_str)
    }
}

/// URL builder over an environment and the server variables.
pub struct Paths<S: EnvSource> {
    env: EnvResolver<S>,
    config: PathsConfig,
}

impl<S: EnvSource> Paths<S> {
    pub fn new(env: EnvResolver<S>, config: PathsConfig) -> Self {
        Self { env, config }
    }

    pub fn config(&self) -> &PathsConfig {
        &self.config
    }

    /// `SERVER_NAME` from the environment, else the server variable, else `web`.
    pub fn server_name(&self) -> String {
        let default = self.config.server_var("SERVER_NAME").unwrap_or(CONTAINER_HOST);
        match self.env.get("SERVER_NAME", default) {
            EnvValue::Null => String::new(),
            value => value.to_string(),
        }
    }

    /// `HTTPS` from the environment, else the server variable, else `off`.
    pub fn https(&self) -> EnvValue {
        let default = self.config.server_var("HTTPS").unwrap_or("off");
        self.env.get("HTTPS", default)
    }

    pub fn https_on(&self) -> bool {
        self.https().to_string().to_lowercase() == "on"
    }

    /// `SERVER_PORT` from the environment, else the server variable, else 80.
    pub fn server_port(&self) -> i64 {
        let default = match self.config.server_var("SERVER_PORT") {
            Some(port) => EnvValue::from(port),
            None => EnvValue::Int(80),
        };
        int_cast(&self.env.get("SERVER_PORT", default))
    }

    pub fn http_protocol(&self) -> &'static str {
        if self.https_on() || self.server_port() == 443 {
            "https"
        } else {
            "http"
        }
    }

    /// Whether `file` is set and exists.
    pub fn check_for_environment_file(&self, file: &Path) -> bool {
        !file.as_os_str().is_empty() && file.exists()
    }

    /// Absolute URL for `to_path` on the current site.
    pub fn curl_path(&self, to_path: &str) -> String {
        let mut server_name = self.server_name();

        if server_name == CONTAINER_HOST
            || (server_name.contains(".local")
                && self.check_for_environment_file(&self.config.curl_check_file))
        {
            server_name = CONTAINER_HOST.to_string();
        }

        let url = format!(
            "{}://{}/{}",
            self.http_protocol(),
            server_name,
            to_path.trim_start_matches('/')
        );
        debug!("curl_path {to_path:?} -> {url}");
        url
    }
}

/// Integer reading of a resolved value: numeric prefix for strings, 1 for
/// `true`, 0 for anything else.
fn int_cast(value: &EnvValue) -> i64 {
    match value {
        EnvValue::Int(i) => *i,
        EnvValue::Float(f) => *f as i64,
        EnvValue::Bool(b) => i64::from(*b),
        EnvValue::String(s) => leading_float(s) as i64,
        EnvValue::Null => 0,
    }
}
