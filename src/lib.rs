pub mod client;
pub mod common;
pub mod server;

pub use client::{ClientConfig, ClientCore, ClientError};
pub use server::{ReplyServer, ServerConfig};
