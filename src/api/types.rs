/*!
 * API Types
 * Server configuration and request handling policy
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{
    DEFAULT_HEADER_READ_TIMEOUT_SECS, DEFAULT_PORT, ENV_ADDR, ENV_ZERO_COUNT,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// How a zero or unparseable record count is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroCountPolicy {
    /// 200 with an empty body
    #[default]
    Silent,
    /// 400 with a JSON error body
    Reject,
}

impl fmt::Display for ZeroCountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZeroCountPolicy::Silent => write!(f, "silent"),
            ZeroCountPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for ZeroCountPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(ZeroCountPolicy::Silent),
            "reject" => Ok(ZeroCountPolicy::Reject),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: SocketAddr,
    pub zero_count_policy: ZeroCountPolicy,
    pub header_read_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            zero_count_policy: ZeroCountPolicy::default(),
            header_read_timeout_secs: DEFAULT_HEADER_READ_TIMEOUT_SECS,
        }
    }
}

impl ServerConfig {
    pub fn new(address: SocketAddr) -> Self {
        Self {
            address,
            ..Default::default()
        }
    }

    /// Defaults overridden by `REPORTER_ADDR` and `REPORTER_ZERO_COUNT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ADDR) {
            config.address = value
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress {
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
        }

        if let Some(value) = lookup(ENV_ZERO_COUNT) {
            config.zero_count_policy = value.parse()?;
        }

        Ok(config)
    }

    pub fn with_zero_count_policy(mut self, policy: ZeroCountPolicy) -> Self {
        self.zero_count_policy = policy;
        self
    }

    pub fn with_header_read_timeout(mut self, timeout_secs: u64) -> Self {
        self.header_read_timeout_secs = timeout_secs;
        self
    }
}
