use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{Error, Result};

/// Environment variable holding the API key.
pub const APIKEY_VAR: &str = "COMPANIES_HOUSE_APIKEY";
/// Environment variable holding the production base URL.
pub const HOST_VAR: &str = "COMPANIES_HOUSE_HOST";
/// Environment variable holding the optional sandbox base URL.
pub const SANDBOX_HOST_VAR: &str = "COMPANIES_HOUSE_SANDBOX_HOST";

/// Client configuration, constructed once and immutable for the life of the
/// client.
///
/// Build it explicitly, or read it from the process environment with
/// [`ClientConfig::from_env`]. The struct serializes cleanly, so callers
/// can also load it from their own config files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key, sent as the username of an HTTP Basic credential.
    pub api_key: String,

    /// Production base URL, e.g. `https://api.company-information.service.gov.uk`.
    pub host: String,

    /// Optional sandbox base URL, used when `sandbox` is true.
    pub sandbox_host: Option<String>,

    /// Route requests to `sandbox_host` instead of `host`.
    pub sandbox: bool,
}

impl ClientConfig {
    /// Create a production configuration with the given credential and host.
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: host.into(),
            sandbox_host: None,
            sandbox: false,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// `COMPANIES_HOUSE_APIKEY` and `COMPANIES_HOUSE_HOST` are required and
    /// must be non-empty; `COMPANIES_HOUSE_SANDBOX_HOST` is optional. A
    /// missing or empty required variable is a configuration error, raised
    /// here before any request is issued.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: required_var(APIKEY_VAR)?,
            host: required_var(HOST_VAR)?,
            sandbox_host: optional_var(SANDBOX_HOST_VAR),
            sandbox: false,
        })
    }

    /// Switch the sandbox flag on or off.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Set the sandbox base URL.
    pub fn with_sandbox_host(mut self, sandbox_host: impl Into<String>) -> Self {
        self.sandbox_host = Some(sandbox_host.into());
        self
    }

    /// The base URL requests should be sent to, honouring the sandbox flag.
    ///
    /// Fails when the sandbox flag is set but no sandbox host is configured;
    /// the routing target is never guessed.
    pub fn base_url(&self) -> Result<&str> {
        if self.sandbox {
            self.sandbox_host.as_deref().ok_or_else(|| {
                Error::Config(format!(
                    "sandbox mode is enabled but {SANDBOX_HOST_VAR} is not set"
                ))
            })
        } else {
            Ok(&self.host)
        }
    }

    /// Check the invariants the client relies on: credential and host must
    /// be present before any request is issued.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config(format!("{APIKEY_VAR} is not set")));
        }
        if self.host.is_empty() {
            return Err(Error::Config(format!("{HOST_VAR} is not set")));
        }
        self.base_url().map(|_| ())
    }
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{name} is not set"))),
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
