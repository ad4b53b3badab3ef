//! # Reply Server
//!
//! A minimal peer for the client: for each accepted connection it reads one
//! chunk, answers according to its [`ReplyMode`] and shuts the stream down.
//! There is no framing and no session state.

use anyhow::{Context, Result};
use log::{debug, error, info};
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use super::config::{ReplyMode, ServerConfig};

pub struct ReplyServer {
    listener: TcpListener,
    mode: ReplyMode,
    buffer_size: usize,
}

impl ReplyServer {
    /// Bind the listener described by `config`.
    ///
    /// Port `0` picks a free port; use [`local_addr`](Self::local_addr) to find it.
    ///
    /// # Example
    /// ```ignore
    /// let server = ReplyServer::bind(&ServerConfig::default()).await?;
    /// server.serve().await;
    /// ```
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let address = config.server.socket_addr();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind to {}", address))?;

        info!(
            "📡 Reply server listening on {} (mode: {:?})",
            listener.local_addr()?,
            config.server.mode
        );

        Ok(Self {
            listener,
            mode: config.server.mode,
            buffer_size: config.server.buffer_size,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, one task per connection.
    pub async fn serve(self) {
        loop {
            match self.listener.accept().await {
                Ok((socket, addr)) => {
                    debug!("🔗 Accepted connection from {}", addr);

                    let (mode, buffer_size) = (self.mode, self.buffer_size);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(socket, mode, buffer_size).await {
                            error!("❌ Connection from {} failed: {}", addr, e);
                        }
                    });
                }
                Err(e) => error!("❌ Accept error: {}", e),
            }
        }
    }

    /// Accept and answer exactly one connection.
    pub async fn serve_once(&self) -> Result<()> {
        let (socket, addr) = self.listener.accept().await?;
        debug!("🔗 Accepted connection from {}", addr);
        handle_connection(socket, self.mode, self.buffer_size).await
    }
}

/// Read one chunk, reply once, shut down.
async fn handle_connection(
    mut socket: TcpStream,
    mode: ReplyMode,
    buffer_size: usize,
) -> Result<()> {
    let mut buffer = vec![0u8; buffer_size];
    let read = socket.read(&mut buffer).await?;
    let received = &buffer[..read];

    info!(
        "📥 Received {} bytes: {:?}",
        read,
        String::from_utf8_lossy(received)
    );

    if let Some(reply) = mode.reply(received) {
        socket.write_all(&reply).await?;
        socket.flush().await?;
        info!("📤 Replied with {} bytes", reply.len());
    }

    socket.shutdown().await?;
    Ok(())
}
