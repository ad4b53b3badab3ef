//! # Client Configuration
//!
//! Every field has a default matching the fixed build: connect to
//! `127.0.0.1:43500`, send `"Hello, Server!"`, read up to 1024 bytes.
//!
//! ```toml
//! [target]
//! address = "127.0.0.1"
//! port = 43500
//!
//! [exchange]
//! message = "Hello, Server!"
//! buffer_size = 1024
//! ```

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::common::config::load_config;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 43500;
pub const DEFAULT_MESSAGE: &str = "Hello, Server!";
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub exchange: ExchangeConfig,
}

/// Remote endpoint the client connects to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub address: String,
    pub port: u16,
}

/// What is sent and how much of the reply is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Text sent to the server, encoded as UTF-8
    pub message: String,
    /// Upper bound for the single reply chunk (bytes)
    pub buffer_size: usize,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl TargetConfig {
    /// `address:port`, as accepted by `TcpStream::connect`.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl ClientConfig {
    /// Load and validate a client configuration file.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = ClientConfig::from_file("config/client.toml")?;
    /// println!("Target: {}", config.target.socket_addr());
    /// ```
    pub fn from_file(path: &str) -> Result<Self> {
        let config: ClientConfig = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.exchange.buffer_size == 0 {
            bail!("exchange.buffer_size must be greater than zero");
        }
        Ok(())
    }
}
