use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::common::config::load_config;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    pub address: String,
    pub port: u16,
    pub mode: ReplyMode,
    pub buffer_size: usize,
}

/// How the server answers the single chunk it reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    /// Send the received bytes back unchanged
    #[default]
    Echo,
    /// Send back the upper-cased text
    Uppercase,
    /// Close without replying
    Silent,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 43500,
            mode: ReplyMode::Echo,
            buffer_size: 1024,
        }
    }
}

impl ListenConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl ReplyMode {
    /// Compute the reply for `received`, or `None` when nothing is sent.
    ///
    /// Upper-casing is Unicode-aware for valid UTF-8 and falls back to
    /// ASCII upper-casing for arbitrary bytes.
    pub fn reply(self, received: &[u8]) -> Option<Vec<u8>> {
        match self {
            ReplyMode::Echo => Some(received.to_vec()),
            ReplyMode::Uppercase => Some(match std::str::from_utf8(received) {
                Ok(text) => text.to_uppercase().into_bytes(),
                Err(_) => received.to_ascii_uppercase(),
            }),
            ReplyMode::Silent => None,
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let config: ServerConfig = load_config(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.buffer_size == 0 {
            bail!("server.buffer_size must be greater than zero");
        }
        Ok(())
    }
}
