//! # Client Core
//!
//! The [`ClientCore`] performs exactly one exchange per call:
//!
//! 1. Connect to the configured endpoint (no retry)
//! 2. Send the configured message, all bytes
//! 3. Read one reply chunk and decode it as UTF-8
//! 4. Close the connection, on every exit path
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tcp_greeter::client::{ClientConfig, ClientCore};
//!
//! let core = ClientCore::new(ClientConfig::default());
//! core.run(&mut std::io::stdout().lock())?;
//! ```

use log::{error, info};
use std::io::Write;

use super::config::ClientConfig;
use super::error::ClientError;
use crate::common::connection::{Connection, Transport};

pub struct ClientCore {
    config: ClientConfig,
}

impl ClientCore {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run one exchange and write `Received: <reply>` to `out`.
    ///
    /// Nothing is written to `out` if the exchange fails.
    ///
    /// # Errors
    ///
    /// Any [`ClientError`] from [`exchange`](Self::exchange), or
    /// [`ClientError::Output`] if the line cannot be written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), ClientError> {
        let reply = self.exchange()?;
        report(out, &reply).map_err(ClientError::Output)
    }

    /// Connect to the configured target and perform one exchange.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The decoded reply; empty if the peer closed without sending
    /// * `Err(ClientError)` - Connect, send, receive or decode failure
    pub fn exchange(&self) -> Result<String, ClientError> {
        let address = self.config.target.socket_addr();
        info!("📡 Connecting to {}", address);

        let conn = Connection::open(&address).map_err(|source| {
            error!("❌ Failed to connect to {}: {}", address, source);
            ClientError::Connection {
                address: address.clone(),
                source,
            }
        })?;

        self.exchange_over(conn)
    }

    /// Send the message and read one reply over an already open connection.
    ///
    /// The connection is consumed and closed before this returns, whatever
    /// the outcome.
    pub fn exchange_over<T: Transport>(
        &self,
        mut conn: Connection<T>,
    ) -> Result<String, ClientError> {
        let message = &self.config.exchange.message;

        conn.send(message.as_bytes())
            .map_err(ClientError::Transmission)?;
        info!("📤 Sent {:?} to {}", message, conn.peer());

        let reply = conn
            .receive(self.config.exchange.buffer_size)
            .map_err(ClientError::Receive)?;
        info!("📥 Received {} bytes from {}", reply.len(), conn.peer());

        let text = String::from_utf8(reply)?;
        Ok(text)
    }
}

/// Write the single output line for a reply.
pub fn report<W: Write>(out: &mut W, reply: &str) -> std::io::Result<()> {
    writeln!(out, "Received: {}", reply)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::MockTransport;
    use std::sync::atomic::Ordering;

    fn core() -> ClientCore {
        ClientCore::new(ClientConfig::default())
    }

    #[test]
    fn test_exchange_returns_reply_and_closes_once() {
        let mock = MockTransport::new(b"Hello, Server!");
        let (written, closes) = (mock.written(), mock.closes());

        let reply = core().exchange_over(Connection::new(mock, "mock")).unwrap();

        assert_eq!(reply, "Hello, Server!");
        assert_eq!(written.lock().unwrap().as_slice(), b"Hello, Server!");
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_reply_is_not_an_error() {
        let mock = MockTransport::new(b"");
        let closes = mock.closes();

        let reply = core().exchange_over(Connection::new(mock, "mock")).unwrap();

        assert_eq!(reply, "");
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reply_truncated_to_buffer_size() {
        let mut config = ClientConfig::default();
        config.exchange.buffer_size = 5;
        let core = ClientCore::new(config);

        let reply = core
            .exchange_over(Connection::new(MockTransport::new(b"HELLO, SERVER!"), "mock"))
            .unwrap();

        assert_eq!(reply, "HELLO");
    }

    #[test]
    fn test_zero_buffer_size_is_receive_error() {
        let mut config = ClientConfig::default();
        config.exchange.buffer_size = 0;
        let core = ClientCore::new(config);
        let mock = MockTransport::new(b"HELLO, SERVER!");
        let closes = mock.closes();

        let err = core
            .exchange_over(Connection::new(mock, "mock"))
            .unwrap_err();

        match err {
            ClientError::Receive(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput),
            other => panic!("expected receive error, got {:?}", other),
        }
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_send_failure_closes_once() {
        let mock = MockTransport::new(b"unused").failing_write();
        let closes = mock.closes();

        let err = core()
            .exchange_over(Connection::new(mock, "mock"))
            .unwrap_err();

        assert!(matches!(err, ClientError::Transmission(_)));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_receive_failure_closes_once() {
        let mock = MockTransport::new(b"").failing_read();
        let closes = mock.closes();

        let err = core()
            .exchange_over(Connection::new(mock, "mock"))
            .unwrap_err();

        assert!(matches!(err, ClientError::Receive(_)));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invalid_utf8_is_decode_error_and_closes_once() {
        let mock = MockTransport::new(&[0xff, 0xfe, 0x41]);
        let closes = mock.closes();

        let err = core()
            .exchange_over(Connection::new(mock, "mock"))
            .unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_report_format() {
        let mut out = Vec::new();
        report(&mut out, "HELLO, SERVER!").unwrap();
        assert_eq!(out, b"Received: HELLO, SERVER!\n");

        let mut out = Vec::new();
        report(&mut out, "").unwrap();
        assert_eq!(out, b"Received: \n");
    }
}
