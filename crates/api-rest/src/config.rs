//! REST server configuration.
//!
//! Resolved once at process startup and then passed into the server. Parsing is
//! kept separate from reading the environment so it can be tested without
//! touching process-wide state.

use std::net::SocketAddr;

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Environment variable holding the listen address.
pub const REST_ADDR_VAR: &str = "PATIENTS_REST_ADDR";

/// Environment variable toggling the Swagger UI.
pub const ENABLE_SWAGGER_VAR: &str = "PATIENTS_ENABLE_SWAGGER";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PATIENTS_REST_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid boolean for {name}: '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

/// Configuration for the REST server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    addr: SocketAddr,
    enable_swagger: bool,
}

impl RestConfig {
    pub fn new(addr: SocketAddr, enable_swagger: bool) -> Self {
        Self {
            addr,
            enable_swagger,
        }
    }

    /// Build a config from optional raw values.
    ///
    /// Missing or blank values fall back to the defaults: listen on
    /// [`DEFAULT_REST_ADDR`] with the Swagger UI enabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the address does not parse as a socket address or the
    /// Swagger flag is not one of `true/false/1/0/yes/no`.
    pub fn from_env_values(
        addr: Option<String>,
        enable_swagger: Option<String>,
    ) -> Result<Self, ConfigError> {
        let addr = non_blank(addr).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr.clone(),
                source,
            })?;

        let enable_swagger = match non_blank(enable_swagger) {
            None => true,
            Some(value) => parse_flag(ENABLE_SWAGGER_VAR, &value)?,
        };

        Ok(Self::new(addr, enable_swagger))
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_values(
            std::env::var(REST_ADDR_VAR).ok(),
            std::env::var(ENABLE_SWAGGER_VAR).ok(),
        )
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn enable_swagger(&self) -> bool {
        self.enable_swagger
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self::new(SocketAddr::from(([0, 0, 0, 0], 3000)), true)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
