//! # Configuration Utilities
//!
//! Generic TOML loading shared by the client and server configurations.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error, with the path in the context
///
/// # Example
/// ```ignore
/// let config: ClientConfig = load_config("config/client.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path))?;
    let config: T =
        toml::from_str(&content).with_context(|| format!("failed to parse config file {}", path))?;
    Ok(config)
}
