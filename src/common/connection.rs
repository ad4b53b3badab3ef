//! # Connection Handle
//!
//! A scoped wrapper around a bidirectional byte transport.
//!
//! ## Wire Behavior
//!
//! There is no framing: [`Connection::send`] writes the raw payload and
//! [`Connection::receive`] returns whatever a single read produced.
//!
//! ## Lifecycle
//!
//! ```text
//! open/new ──> send / receive ──> close (explicit or on drop)
//! ```
//!
//! The transport is closed exactly once. An explicit [`Connection::close`]
//! releases it early; otherwise dropping the handle does, on every exit path.

use log::debug;
use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};

/// A byte stream that can be read, written and explicitly closed.
///
/// Implemented for [`TcpStream`]; tests substitute an in-memory double.
pub trait Transport: Read + Write {
    /// Release the underlying resource.
    fn close(&mut self) -> io::Result<()>;
}

impl Transport for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}

/// Close-once connection over a [`Transport`].
pub struct Connection<T: Transport> {
    /// `None` once the connection has been closed
    transport: Option<T>,
    /// Remote endpoint label, used for logging
    peer: String,
}

impl Connection<TcpStream> {
    /// Open a TCP connection to `address` (e.g. `"127.0.0.1:43500"`).
    ///
    /// Blocks until the handshake completes or fails. No retry.
    ///
    /// # Example
    /// ```ignore
    /// let mut conn = Connection::open("127.0.0.1:43500")?;
    /// conn.send(b"Hello, Server!")?;
    /// ```
    pub fn open(address: &str) -> io::Result<Self> {
        let stream = TcpStream::connect(address)?;
        debug!("🔗 Connected to {}", address);
        Ok(Self::new(stream, address))
    }
}

impl<T: Transport> Connection<T> {
    /// Wrap an already established transport.
    pub fn new(transport: T, peer: impl Into<String>) -> Self {
        Self {
            transport: Some(transport),
            peer: peer.into(),
        }
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    /// Write the whole payload, looping on partial writes, then flush.
    ///
    /// # Errors
    /// - `NotConnected` if the connection was already closed
    /// - any I/O error from the transport
    pub fn send(&mut self, payload: &[u8]) -> io::Result<()> {
        let transport = self.transport_mut()?;
        transport.write_all(payload)?;
        transport.flush()?;
        debug!("📤 Sent {} bytes to {}", payload.len(), self.peer);
        Ok(())
    }

    /// Block until one chunk of at most `max_len` bytes arrives.
    ///
    /// An empty vector means the peer closed the stream without sending
    /// anything. Interrupted reads are retried.
    ///
    /// # Errors
    /// - `InvalidInput` if `max_len` is zero
    /// - `NotConnected` if the connection was already closed
    pub fn receive(&mut self, max_len: usize) -> io::Result<Vec<u8>> {
        if max_len == 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                "receive buffer must be larger than zero",
            ));
        }
        let transport = self.transport_mut()?;
        let mut buffer = vec![0u8; max_len];

        let read = loop {
            match transport.read(&mut buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        buffer.truncate(read);
        debug!("📥 Received {} bytes from {}", read, self.peer);
        Ok(buffer)
    }

    /// Close the transport. Calling this on a closed connection is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        match self.transport.take() {
            Some(mut transport) => {
                debug!("🔌 Closing connection to {}", self.peer);
                transport.close()
            }
            None => Ok(()),
        }
    }

    fn transport_mut(&mut self) -> io::Result<&mut T> {
        self.transport
            .as_mut()
            .ok_or_else(|| io::Error::new(ErrorKind::NotConnected, "connection already closed"))
    }
}

impl<T: Transport> Drop for Connection<T> {
    fn drop(&mut self) {
        // The peer may already have torn the stream down.
        if let Err(e) = self.close() {
            debug!("⚠️  Error while closing connection to {}: {}", self.peer, e);
        }
    }
}
