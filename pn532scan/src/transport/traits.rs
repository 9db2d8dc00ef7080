// pn532scan/src/transport/traits.rs

use crate::Result;
use crate::config::SerialSettings;
use crate::types::PortInfo;

/// Transport trait abstracts byte I/O away from protocol/device logic.
pub trait Transport {
    /// Write all of `data` to the device.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `max_len` bytes. Returns early with fewer bytes (possibly
    /// none) once the configured read timeout expires; a short read is not
    /// an error.
    fn read(&mut self, max_len: usize) -> Result<Vec<u8>>;

    /// Discard anything already waiting in the input buffer.
    fn reset_input_buffer(&mut self) -> Result<()>;

    /// Release the underlying handle. Further I/O fails with
    /// `Error::TransportClosed`.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn read(&mut self, max_len: usize) -> Result<Vec<u8>> {
        (**self).read(max_len)
    }

    fn reset_input_buffer(&mut self) -> Result<()> {
        (**self).reset_input_buffer()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Opens a transport for a port id reported by a [`PortEnumerator`].
pub trait PortOpener {
    fn open(&mut self, port: &str, settings: &SerialSettings) -> Result<Box<dyn Transport>>;
}

/// Lists candidate ports in a stable order.
pub trait PortEnumerator {
    fn list_ports(&self) -> Result<Vec<PortInfo>>;
}
