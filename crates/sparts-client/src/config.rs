//! Client configuration
//!
//! Configuration is an explicit value passed into the engine constructors,
//! not a global lookup. Loading layers an optional `sparts.toml` file under
//! `SPARTS_`-prefixed environment variables, so e.g. `SPARTS_LEDGER_ADDRESS`
//! overrides the file.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;

fn default_ledger_address() -> String {
    "localhost:818".to_string()
}

/// Signing key pair required for every mutating ledger call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub private_key: String,
    pub public_key: String,
}

impl Credentials {
    /// Both keys present. An empty key is a precondition failure for any
    /// mutation, reported before the network is touched.
    pub fn is_complete(&self) -> bool {
        !self.private_key.is_empty() && !self.public_key.is_empty()
    }
}

/// Configuration for the sparts ledger client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Ledger address, `host:port` or a full URL
    #[serde(default = "default_ledger_address")]
    pub ledger_address: String,

    /// Private signing key for mutations
    #[serde(default)]
    pub private_key: String,

    /// Public key paired with the private key
    #[serde(default)]
    pub public_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ledger_address: default_ledger_address(),
            private_key: String::new(),
            public_key: String::new(),
        }
    }
}

impl ClientConfig {
    /// Build a configuration programmatically (tests, embedding callers)
    pub fn new(
        ledger_address: impl Into<String>,
        private_key: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            ledger_address: ledger_address.into(),
            private_key: private_key.into(),
            public_key: public_key.into(),
        }
    }

    /// Load configuration from `sparts.toml` (optional) and `SPARTS_*`
    /// environment variables, environment winning
    pub fn load() -> ClientResult<Self> {
        let config = Config::builder()
            .add_source(File::with_name("sparts").required(false))
            .add_source(Environment::with_prefix("SPARTS"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The signing key pair from this configuration
    pub fn credentials(&self) -> Credentials {
        Credentials {
            private_key: self.private_key.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_empty_keys() {
        let config = ClientConfig::default();
        assert_eq!(config.ledger_address, "localhost:818");
        assert!(!config.credentials().is_complete());
    }

    #[test]
    fn test_credentials_require_both_keys() {
        assert!(Credentials {
            private_key: "priv".into(),
            public_key: "pub".into(),
        }
        .is_complete());

        assert!(!Credentials {
            private_key: "priv".into(),
            public_key: String::new(),
        }
        .is_complete());

        assert!(!Credentials {
            private_key: String::new(),
            public_key: "pub".into(),
        }
        .is_complete());
    }

    #[test]
    fn test_programmatic_constructor() {
        let config = ClientConfig::new("ledger.example:818", "priv", "pub");
        assert!(config.credentials().is_complete());
        assert_eq!(config.ledger_address, "ledger.example:818");
    }
}
