//! # Server Binary Entry Point
//!
//! Runs a reply server for the client to talk to.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin server
//! cargo run --bin server -- --mode uppercase
//! cargo run --bin server -- --config config/server.toml --port 43501
//! ```

use clap::Parser;

use tcp_greeter::common::logging::init_logger;
use tcp_greeter::server::{ReplyMode, ReplyServer, ServerConfig};

/// Command-line arguments for the server binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a server configuration file (TOML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Reply mode, overrides the config file
    #[arg(short, long, value_enum)]
    mode: Option<ReplyMode>,

    /// Listening port, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => ServerConfig::from_file(&path)?,
        None => ServerConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.server.mode = mode;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let server = ReplyServer::bind(&config).await?;

    // Runs until the process is killed
    server.serve().await;

    Ok(())
}
