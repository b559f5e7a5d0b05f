//! Runtime configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the network file.
pub const NETWORK_ENV: &str = "METRO_NETWORK";

/// Environment variable holding the HTTP listen address.
pub const LISTEN_ENV: &str = "METRO_LISTEN";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed
    #[error("invalid {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Configuration for the metro server binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// File to load the network from.
    /// When unset the network is read from standard input.
    pub network_path: Option<PathBuf>,

    /// Address to serve the HTTP API on.
    /// When unset the interactive shell runs instead.
    pub listen: Option<SocketAddr>,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(network_path: Option<PathBuf>, listen: Option<SocketAddr>) -> Self {
        Self {
            network_path,
            listen,
        }
    }

    /// Read configuration from `METRO_NETWORK` and `METRO_LISTEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let network_path = get(NETWORK_ENV).map(PathBuf::from);

        let listen = get(LISTEN_ENV)
            .map(|value| {
                value
                    .trim()
                    .parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: LISTEN_ENV,
                        value,
                    })
            })
            .transpose()?;

        Ok(Self {
            network_path,
            listen,
        })
    }
}
