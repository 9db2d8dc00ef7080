//! Timing helpers.
//!
//! The PN532 needs fixed settle times between a write and the matching
//! read; the defaults used across the crate live here.

use std::time::Duration;

/// Serial read timeout in milliseconds used when a caller doesn't provide
/// an explicit one.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Settle time after the wake-up preamble
pub const WAKE_SETTLE_MS: u64 = 100;

/// Settle time after GetFirmwareVersion
pub const FIRMWARE_SETTLE_MS: u64 = 100;

/// Settle time after InListPassiveTarget; the RF target search takes
/// longer than a firmware query.
pub const UID_SETTLE_MS: u64 = 300;

/// Pause between two card polls
pub const POLL_INTERVAL_MS: u64 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Block the calling thread for `d`. A zero duration returns immediately,
/// which tests rely on.
pub fn settle(d: Duration) {
    if !d.is_zero() {
        std::thread::sleep(d);
    }
}
