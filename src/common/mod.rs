//! # Common Components
//!
//! Shared utilities used by both the client and the reply server.
//!
//! ## Modules
//!
//! - [`connection`]: close-once connection handle over a byte transport
//! - [`config`]: TOML configuration loading
//! - [`logging`]: logger initialization shared by the binaries

pub mod config;
pub mod connection;
pub mod logging;

#[cfg(test)]
pub(crate) mod testing;
