// pn532scan/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::SerialSettings;
use crate::transport::traits::{PortEnumerator, PortOpener, Transport};
use crate::types::PortInfo;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and returns
/// queued responses, one per `read`.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// `max_len` of every read call, in order
    pub reads: Vec<usize>,
    pub input_resets: usize,
    pub closed: bool,
    /// Testing hook: number of upcoming writes that fail with an io error
    pub write_failures: usize,
    /// Testing hook: number of upcoming reads that fail with an io error
    pub read_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply; replies longer than the read size are truncated.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Wrap in a shared handle so a test can inspect the mock after a
    /// scanner or device has taken ownership of the transport.
    pub fn into_shared(self) -> SharedMockTransport {
        SharedMockTransport {
            inner: Rc::new(RefCell::new(self)),
        }
    }

    fn simulated_failure(what: &str) -> Error {
        Error::Io(std::io::Error::other(format!("simulated {} failure", what)))
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::TransportClosed);
        }
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Self::simulated_failure("write"));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        if self.closed {
            return Err(Error::TransportClosed);
        }
        self.reads.push(max_len);
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Self::simulated_failure("read"));
        }
        if self.responses.is_empty() {
            // Read timeout with nothing received
            return Ok(Vec::new());
        }
        let mut resp = self.responses.remove(0);
        resp.truncate(max_len);
        Ok(resp)
    }

    fn reset_input_buffer(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::TransportClosed);
        }
        // Queued responses model replies that arrive after the next write,
        // so they are kept.
        self.input_resets += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// Cloneable handle to a [`MockTransport`]; every clone drives the same
/// mock.
#[derive(Debug, Clone)]
pub struct SharedMockTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMockTransport {
    /// Run `f` against the underlying mock.
    pub fn with<R>(&self, f: impl FnOnce(&mut MockTransport) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}

impl Transport for SharedMockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().write(data)
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read(max_len)
    }

    fn reset_input_buffer(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset_input_buffer()
    }

    fn close(&mut self) -> Result<()> {
        self.inner.borrow_mut().close()
    }
}

/// What a [`MockOpener`] does when asked for a port.
#[derive(Debug, Clone)]
enum MockPort {
    Transport(SharedMockTransport),
    Fail(String),
}

/// Port opener backed by mocks, recording every open call.
#[derive(Debug, Default)]
pub struct MockOpener {
    ports: HashMap<String, MockPort>,
    /// Port ids passed to `open`, in order
    pub opened: Vec<String>,
    /// Settings passed to `open`, in order
    pub settings: Vec<SerialSettings>,
}

impl MockOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a port that opens to `transport`.
    pub fn add(&mut self, port: &str, transport: SharedMockTransport) -> &mut Self {
        self.ports
            .insert(port.to_string(), MockPort::Transport(transport));
        self
    }

    /// Register a port whose open call fails.
    pub fn add_failing(&mut self, port: &str, reason: &str) -> &mut Self {
        self.ports
            .insert(port.to_string(), MockPort::Fail(reason.to_string()));
        self
    }
}

impl PortOpener for MockOpener {
    fn open(&mut self, port: &str, settings: &SerialSettings) -> Result<Box<dyn Transport>> {
        self.opened.push(port.to_string());
        self.settings.push(*settings);
        match self.ports.get(port) {
            Some(MockPort::Transport(t)) => Ok(t.boxed()),
            Some(MockPort::Fail(reason)) => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                reason.clone(),
            ))),
            None => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such port: {}", port),
            ))),
        }
    }
}

/// Fixed port list for tests.
#[derive(Debug, Clone, Default)]
pub struct MockPortList {
    pub ports: Vec<PortInfo>,
}

impl MockPortList {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ports: ids.iter().map(|id| PortInfo::new(*id, "mock port")).collect(),
        }
    }
}

impl PortEnumerator for MockPortList {
    fn list_ports(&self) -> Result<Vec<PortInfo>> {
        Ok(self.ports.clone())
    }
}
