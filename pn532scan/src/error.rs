// pn532scan/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // serialport is an optional dependency so the protocol layer can be used
    // with any transport.
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("transport is closed")]
    TransportClosed,

    #[error("response not recognized as a PN532 reply")]
    NotRecognized,

    #[error("malformed frame: uid length {declared} exceeds {available} available bytes")]
    MalformedFrame { declared: usize, available: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("no serial ports found")]
    NoPortsFound,

    #[error("no PN532 device found on {tried} port(s)")]
    NoDeviceFound { tried: usize },

    #[error("cancelled")]
    Cancelled,
}

impl Error {
    /// True for errors raised by the underlying transport rather than by
    /// frame decoding.
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Io(_) | Error::TransportClosed => true,
            #[cfg(feature = "serial")]
            Error::Serial(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
