// pn532scan/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use serialport::{ClearBuffer, SerialPort};

use crate::config::SerialSettings;
use crate::transport::traits::{PortOpener, Transport};
use crate::utils::bytes_to_hex;
use crate::{Error, Result};

/// Host serial port (UART or USB-serial bridge) speaking PN532 HSU.
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    name: String,
    read_timeout: Duration,
}

impl SerialTransport {
    /// Open `port_name` at 8N1 with the given baud rate and read timeout.
    pub fn open(port_name: &str, settings: &SerialSettings) -> Result<Self> {
        let port = serialport::new(port_name, settings.baud_rate)
            .timeout(settings.read_timeout)
            .open()?;
        log::debug!("opened {} at {} baud", port_name, settings.baud_rate);
        Ok(Self {
            port: Some(port),
            name: port_name.to_string(),
            read_timeout: settings.read_timeout,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port.as_mut().ok_or(Error::TransportClosed)
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("name", &self.name)
            .field("open", &self.is_open())
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        log::trace!("{} tx: {}", self.name, bytes_to_hex(data));
        let port = self.port_mut()?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    /// Keeps reading until `max_len` bytes arrived or the read timeout
    /// elapsed, whichever comes first.
    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        let deadline = Instant::now() + self.read_timeout;
        let port = self.port_mut()?;
        let mut buf = vec![0u8; max_len];
        let mut filled = 0;

        while filled < max_len {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            port.set_timeout(deadline - now)?;
            match port.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        buf.truncate(filled);
        log::trace!("{} rx: {}", self.name, bytes_to_hex(&buf));
        Ok(buf)
    }

    fn reset_input_buffer(&mut self) -> Result<()> {
        self.port_mut()?.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.port.take().is_some() {
            log::debug!("closed {}", self.name);
        }
        Ok(())
    }
}

/// Opens real serial ports.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialOpener;

impl PortOpener for SerialOpener {
    fn open(&mut self, port: &str, settings: &SerialSettings) -> Result<Box<dyn Transport>> {
        Ok(Box::new(SerialTransport::open(port, settings)?))
    }
}
