pub mod config;
pub mod server;

pub use config::{ReplyMode, ServerConfig};
pub use server::ReplyServer;
