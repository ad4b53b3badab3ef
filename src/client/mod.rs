//! # Client Components
//!
//! ## Core Client ([`client`])
//! Performs one request/response exchange: connect, send the greeting,
//! read one reply chunk, close.
//!
//! ## Configuration ([`config`])
//! Target endpoint and exchange parameters, defaulting to the fixed
//! `127.0.0.1:43500` / `"Hello, Server!"` build.
//!
//! ## Errors ([`error`])
//! The closed set of ways an exchange can fail.

pub mod client;
pub mod config;
pub mod error;

// Re-export for convenience
pub use client::ClientCore;
pub use config::ClientConfig;
pub use error::ClientError;
