//! # Client Binary Entry Point
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin client
//! cargo run --bin client -- --config config/client.toml
//! cargo run --bin client -- --address 127.0.0.1 --port 43501
//! ```
//!
//! Without a config file the client connects to `127.0.0.1:43500`, sends
//! `Hello, Server!` and prints the reply as `Received: <reply>`.
//! Any failure is reported on stderr and the process exits non-zero.

use clap::Parser;
use std::io;

use tcp_greeter::client::{ClientConfig, ClientCore};
use tcp_greeter::common::logging::init_logger;

/// Command-line arguments for the client binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a client configuration file (TOML format)
    ///
    /// Example: config/client.toml
    #[arg(short, long)]
    config: Option<String>,

    /// Server address, overrides the config file
    #[arg(short, long, visible_alias = "ip")]
    address: Option<String>,

    /// Server port, overrides the config file
    #[arg(short, long, visible_alias = "io")]
    port: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => ClientConfig::from_file(&path)?,
        None => ClientConfig::default(),
    };
    if let Some(address) = args.address {
        config.target.address = address;
    }
    if let Some(port) = args.port {
        config.target.port = port;
    }

    let core = ClientCore::new(config);
    core.run(&mut io::stdout().lock())?;

    Ok(())
}
