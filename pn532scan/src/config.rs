// pn532scan/src/config.rs
//! Runtime settings for opening ports, probing and polling.

use std::time::Duration;

use crate::constants::PN532_DEFAULT_BAUD_RATE;
use crate::protocol::ResponseMode;
use crate::utils::{self, ms};

/// Parameters handed to a [`PortOpener`](crate::transport::PortOpener).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialSettings {
    pub baud_rate: u32,
    /// Upper bound for a single `read`
    pub read_timeout: Duration,
}

impl Default for SerialSettings {
    fn default() -> Self {
        Self {
            baud_rate: PN532_DEFAULT_BAUD_RATE,
            read_timeout: utils::default_read_timeout(),
        }
    }
}

/// Fixed waits between a write and the matching read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub wake_settle: Duration,
    pub firmware_settle: Duration,
    pub uid_settle: Duration,
    pub poll_interval: Duration,
}

impl Timing {
    /// No waits at all. Only useful against transports that answer
    /// instantly, such as the mock transport.
    pub fn immediate() -> Self {
        Self {
            wake_settle: Duration::ZERO,
            firmware_settle: Duration::ZERO,
            uid_settle: Duration::ZERO,
            poll_interval: Duration::ZERO,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            wake_settle: ms(utils::WAKE_SETTLE_MS),
            firmware_settle: ms(utils::FIRMWARE_SETTLE_MS),
            uid_settle: ms(utils::UID_SETTLE_MS),
            poll_interval: ms(utils::POLL_INTERVAL_MS),
        }
    }
}

/// Everything the scanner, prober and poll loop need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub serial: SerialSettings,
    pub timing: Timing,
    pub response_mode: ResponseMode,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.serial.baud_rate = baud_rate;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.serial.read_timeout = timeout;
        self
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_response_mode(mut self, mode: ResponseMode) -> Self {
        self.response_mode = mode;
        self
    }
}
