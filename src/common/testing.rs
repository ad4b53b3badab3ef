//! In-memory [`Transport`] double for unit tests.

use std::io::{self, ErrorKind, Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::connection::Transport;

pub(crate) struct MockTransport {
    reply: Vec<u8>,
    position: usize,
    max_write: usize,
    interruptions: usize,
    fail_write: bool,
    fail_read: bool,
    fail_close: bool,
    written: Arc<Mutex<Vec<u8>>>,
    closes: Arc<AtomicUsize>,
}

impl MockTransport {
    /// A transport whose peer answers with `reply` and then closes.
    pub(crate) fn new(reply: &[u8]) -> Self {
        Self {
            reply: reply.to_vec(),
            position: 0,
            max_write: usize::MAX,
            interruptions: 0,
            fail_write: false,
            fail_read: false,
            fail_close: false,
            written: Arc::new(Mutex::new(Vec::new())),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Accept at most `max_write` bytes per `write` call.
    pub(crate) fn with_max_write(mut self, max_write: usize) -> Self {
        self.max_write = max_write;
        self
    }

    /// Fail the first `count` reads with `Interrupted`.
    pub(crate) fn with_interruptions(mut self, count: usize) -> Self {
        self.interruptions = count;
        self
    }

    pub(crate) fn failing_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub(crate) fn failing_read(mut self) -> Self {
        self.fail_read = true;
        self
    }

    pub(crate) fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    pub(crate) fn written(&self) -> Arc<Mutex<Vec<u8>>> {
        Arc::clone(&self.written)
    }

    pub(crate) fn closes(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closes)
    }
}

impl Read for MockTransport {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interruptions > 0 {
            self.interruptions -= 1;
            return Err(io::Error::new(ErrorKind::Interrupted, "interrupted"));
        }
        if self.fail_read {
            return Err(io::Error::new(ErrorKind::ConnectionReset, "reset by peer"));
        }

        let remaining = &self.reply[self.position..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        Ok(n)
    }
}

impl Write for MockTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_write {
            return Err(io::Error::new(ErrorKind::BrokenPipe, "broken pipe"));
        }

        let n = buf.len().min(self.max_write);
        self.written.lock().unwrap().extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Transport for MockTransport {
    fn close(&mut self) -> io::Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        if self.fail_close {
            return Err(io::Error::new(ErrorKind::NotConnected, "already torn down"));
        }
        Ok(())
    }
}
